/*
* Heartbeat Task
*   Boot flashes, then one short blink per second. A smoothed reading
*   over the alarm threshold switches to the fast pattern.
*/

use crate::resources::LedResources;
use crate::resources::ALARM_SIGNAL;
use crate::resources::BOOT_BLINK;
use crate::resources::HEARTBEAT_BLINK;
use crate::resources::ALARM_BLINK;

use sensor_kit::StatusLed;
use sensor_kit::BlinkPattern;
use embassy_rp::gpio::Output;
use embassy_rp::gpio::Level;
use embassy_time::Delay;

/* --------------------------- Code -------------------------- */
async fn run_pattern(led: &mut StatusLed<Output<'static>>, pattern: &BlinkPattern) {
    let Ok(()) = led.blink_async(&mut Delay, pattern.count, pattern.on_ms, pattern.off_ms).await;
}

#[embassy_executor::task]
pub async fn heartbeat_task(r: LedResources) {
    let Ok(mut led) = StatusLed::new(Output::new(r.LED_PIN, Level::Low), HEARTBEAT_BLINK.polarity);

    run_pattern(&mut led, &BOOT_BLINK).await;

    loop {
        if let Some(estimate) = ALARM_SIGNAL.try_take() {
            log::info!("alarm {}", estimate);
            run_pattern(&mut led, &ALARM_BLINK).await;
        }
        else {
            run_pattern(&mut led, &HEARTBEAT_BLINK).await;
        }
    }
}
