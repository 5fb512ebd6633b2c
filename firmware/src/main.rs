#![no_std]
#![no_main]

// Mod
mod tasks;
mod resources;

// Resources
use crate::resources::Irqs;
use crate::resources::AssignedResources;
use crate::resources::LedResources;
use crate::resources::SensorResources;
use crate::resources::SensorHandler;

// Tasks
use crate::tasks::heartbeat::heartbeat_task;
use crate::tasks::sensor::sensor_task;
use crate::tasks::logger::usb_logger_task;
use crate::tasks::logger::debug_tick_task;

// Library
use defmt_rtt as _;
use panic_probe as _;

use embassy_rp::usb::Driver;
use embassy_executor::Spawner;

pub static SENSOR: SensorHandler = SensorHandler::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let ph = embassy_rp::init(Default::default());
    let p = split_resources!(ph);
    let usb_driver = Driver::new(ph.USB, Irqs);

    defmt::info!("sensor node starting");

    spawner.must_spawn(usb_logger_task(usb_driver));
    spawner.must_spawn(heartbeat_task(p.led_resources));
    spawner.must_spawn(sensor_task(p.sensor_resources));
    spawner.must_spawn(debug_tick_task());
}
