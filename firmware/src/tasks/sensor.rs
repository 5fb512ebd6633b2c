/*
* Sensor Task
*/

// Resources
use crate::SENSOR;
use crate::resources::Irqs;
use crate::resources::SensorResources;
use crate::resources::ALARM_SIGNAL;
use crate::resources::ALARM_THRESHOLD;
use crate::resources::SAMPLE_INTERVAL_MS;
use crate::resources::SMOOTHING_WINDOW;
use crate::resources::REPORT_EVERY_N_SAMPLES;

// Library
use sensor_kit::Smoother;
use embassy_rp::adc::Adc;
use embassy_rp::adc::Channel;
use embassy_rp::adc::Config;
use embassy_rp::gpio::Pull;
use embassy_time::Ticker;
use embassy_time::Duration;

/* --------------------------- Code -------------------------- */
#[embassy_executor::task]
pub async fn sensor_task(r: SensorResources) {
    let mut adc = Adc::new(r.ADC_UNIT, Irqs, Config::default());
    let mut channel = Channel::new_pin(r.SENSOR_PIN, Pull::None);

    let mut smoother = match Smoother::new(SMOOTHING_WINDOW) {
        Ok(smoother) => smoother,
        Err(e) => {
            log::error!("{}, using default window", e);
            Smoother::default()
        }
    };

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let mut samples: u32 = 0;
    let mut alarmed = false;

    loop {
        match adc.read(&mut channel).await {
            Ok(raw) => {
                let estimate = smoother.add_sample(i32::from(raw));
                samples = samples.wrapping_add(1);
                SENSOR.publish(estimate, samples);

                let over = estimate > ALARM_THRESHOLD;
                if over && !alarmed {
                    ALARM_SIGNAL.signal(estimate);
                }
                alarmed = over;

                if samples % REPORT_EVERY_N_SAMPLES == 0 {
                    log::info!("adc {} {}", raw, estimate);
                }
            }
            Err(e) => {
                log::info!("ADC read failed: {:?}", e);
                smoother.reset();
            }
        }

        ticker.next().await;
    }
}
