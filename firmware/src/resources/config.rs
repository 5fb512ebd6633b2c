/*
*  Default Firmware Config
*
*  Sensor Node
*  - Status LED on GPIO25 (Pico onboard LED, active high)
*  - Analog sensor on GPIO26 / ADC0, 12-bit
*/

use super::*;
use sensor_kit::BlinkPattern;
use sensor_kit::DebugConfig;
use sensor_kit::DEFAULT_SMOOTHING_WINDOW;

/* --------------------------- Sensor Config -------------------------- */
pub const SAMPLE_INTERVAL_MS: u64 = 50;
pub const SMOOTHING_WINDOW: u16 = DEFAULT_SMOOTHING_WINDOW;
pub const ALARM_THRESHOLD: i32 = 3000; // ADC counts, out of 4095
pub const REPORT_EVERY_N_SAMPLES: u32 = 20; // One log line per second

/* --------------------------- LED Config -------------------------- */
pub const BOOT_BLINK: BlinkPattern = BlinkPattern::new(3, 100);
pub const HEARTBEAT_BLINK: BlinkPattern = BlinkPattern::new(1, 50).with_off_ms(950);
pub const ALARM_BLINK: BlinkPattern = BlinkPattern::new(5, 40).with_off_ms(60);

/* --------------------------- Debug Trace Config -------------------------- */
pub const DEBUG_TICK_MS: u64 = 50;
// LogChannel never buffers in hardware, so no settle wait on flush
pub const DEBUG_CONFIG: DebugConfig = DebugConfig::new().with_flush_settle_ms(0);
pub const DEBUG_LINE_BUFFER: usize = 128;

/* --------------------------- USB Logger -------------------------- */
pub const USB_LOG_BUFFER_SIZE: usize = 1024;

/* --------------------------- Communication Channels-------------------------- */
pub static ALARM_SIGNAL: Signal<CriticalSectionRawMutex, i32> = Signal::new();
