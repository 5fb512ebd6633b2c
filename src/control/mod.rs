pub mod smoother;

pub use smoother::*;
