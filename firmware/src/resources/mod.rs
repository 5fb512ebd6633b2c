/* 
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;
use core::sync::atomic::AtomicI32;
use core::sync::atomic::AtomicU32;
use core::sync::atomic::AtomicBool;
use core::sync::atomic::Ordering;

use embassy_sync::signal::Signal;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/* --------------------------- Declare Modules -------------------------- */
pub mod gpio_list;
pub mod config;
pub mod sensor_resources;

pub use gpio_list::*;
pub use config::*;
pub use sensor_resources::*;
