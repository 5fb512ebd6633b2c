pub mod heartbeat;
pub mod sensor;
pub mod logger;
