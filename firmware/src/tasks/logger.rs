/*
* Logger Task
*/

// Resources
use crate::SENSOR;
use crate::resources::DEBUG_CONFIG;
use crate::resources::DEBUG_TICK_MS;
use crate::resources::DEBUG_LINE_BUFFER;
use crate::resources::USB_LOG_BUFFER_SIZE;

// Library
use sensor_kit::DebugFormatter;
use sensor_kit::LogChannel;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_time::Delay;
use embassy_time::Duration;
use embassy_time::Ticker;

/* --------------------------- Code -------------------------- */
#[embassy_executor::task]
pub async fn usb_logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(USB_LOG_BUFFER_SIZE, log::LevelFilter::Info, driver);
}

#[embassy_executor::task]
pub async fn debug_tick_task() {
    let channel = LogChannel::<DEBUG_LINE_BUFFER>::new(log::Level::Info);

    let mut debug = match DebugFormatter::new(channel, Delay, DEBUG_CONFIG) {
        Ok(debug) => debug,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    debug.line("sensor node up");

    let mut ticker = Ticker::every(Duration::from_millis(DEBUG_TICK_MS));

    loop {
        debug.tick();

        // Once per wrapped row, note where the signal sits
        if debug.column() == 0 && debug.ticks() % DEBUG_CONFIG.tick_interval == 0 {
            match SENSOR.get_estimate() {
                Some(estimate) => debug.line_fmt(format_args!("est {} n {}", estimate, SENSOR.get_sample_count())),
                None => debug.line("est -"),
            }
        }

        ticker.next().await;
    }
}
