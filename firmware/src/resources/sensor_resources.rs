/*
    Sensor Resources
*/

use super::*;

/* --------------------------- Sensor Handle -------------------------- */
pub struct SensorHandler {
    estimate: AtomicI32,
    ready: AtomicBool,
    samples: AtomicU32,
}

impl SensorHandler {
    pub const fn new() -> Self {
        Self {
            estimate: AtomicI32::new(0),
            ready: AtomicBool::new(false),
            samples: AtomicU32::new(0),
        }
    }

    pub fn publish(&self, estimate: i32, samples: u32) {
        self.estimate.store(estimate, Ordering::Relaxed);
        self.samples.store(samples, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
    }

    pub fn get_estimate(&self) -> Option<i32> {
        if self.ready.load(Ordering::Acquire) {
            return Some(self.estimate.load(Ordering::Relaxed));
        }
        None
    }

    pub fn get_sample_count(&self) -> u32 {
        return self.samples.load(Ordering::Relaxed);
    }
}
