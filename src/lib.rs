/*
* Sensor Kit
*   - control: running average of a sampled signal
*   - led: blink helper over embedded-hal pins
*   - debug: optional serial trace with line wrapping
*/

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod debug;
pub mod error;
pub mod led;

pub use config::*;
pub use control::*;
pub use debug::*;
pub use error::{Error, Result};
pub use led::*;
