/*
    Sketch-style loop: sample, smooth, trace, blink on threshold.
*/

use core::convert::Infallible;

use embedded_hal_1::delay::DelayNs;
use embedded_hal_1::digital::{ErrorType, OutputPin};
use sensor_kit::{blink, BlinkPattern, DebugConfig, DebugFormatter, Smoother, WriterChannel};

#[derive(Default)]
struct Led {
    toggles: u32,
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.toggles += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.toggles += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Clock {
    elapsed_ms: u64,
}

impl DelayNs for Clock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ms += u64::from(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
    }
}

#[test]
fn noisy_signal_settles_and_trace_wraps() {
    let mut smoother = Smoother::default();
    let mut debug = DebugFormatter::new(
        WriterChannel::new(String::new()),
        Clock::default(),
        DebugConfig::default(),
    )
    .unwrap();

    let mut estimate = 0;
    for i in 0..1_700 {
        let noise = [-6, 3, 5, -2][i % 4];
        estimate = smoother.add_sample(2_000 + noise);
        debug.tick();
    }

    assert!((estimate - 2_000).abs() <= 6, "estimate {}", estimate);
    assert_eq!(debug.ticks(), 1_700);
    // 85 dots: one full 80-dot row, then 5 more
    assert_eq!(debug.column(), 5);

    let (channel, clock) = debug.into_parts();
    let trace = channel.into_inner();
    assert_eq!(trace.matches('.').count(), 85);
    assert_eq!(trace.matches("\r\n").count(), 1);
    assert_eq!(clock.elapsed_ms, 2 * 1_700);
}

#[test]
fn threshold_crossing_blinks_led() {
    let mut smoother = Smoother::new(4).unwrap();
    let mut led = Led::default();
    let mut clock = Clock::default();
    let alarm = BlinkPattern::new(3, 100).with_off_ms(50);

    for raw in [10, 10, 400, 400, 400, 400] {
        if smoother.add_sample(raw) > 200 {
            blink(&mut led, &mut clock, &alarm).unwrap();
        }
    }

    // 10, 10, 108, 181, 236, 277: two readings over threshold
    assert_eq!(led.toggles, 2 * 6);
    assert_eq!(clock.elapsed_ms, 2 * 3 * 150);
}
