/*
    Running Average Filter
*/

use core::num::NonZeroU16;

use crate::config::DEFAULT_SMOOTHING_WINDOW;
use crate::error::{Error, Result};

const DEFAULT_WINDOW: NonZeroU16 = match NonZeroU16::new(DEFAULT_SMOOTHING_WINDOW) {
    Some(window) => window,
    None => panic!("default smoothing window must be positive"),
};

/* --------------------------- Code -------------------------- */

/// Blends `next` into `previous` as an exponential moving average spanning
/// `window` samples. The first sample passes through unchanged.
///
/// Rounding adds `window / 2` before a floor division, so halves round up
/// for negative inputs as well as positive ones.
pub fn smoothed_average(previous: i32, next: i32, first_sample: bool, window: NonZeroU16) -> i32 {
    if first_sample {
        return next;
    }

    let window = i64::from(window.get());
    let numerator = (window - 1) * i64::from(previous) + i64::from(next) + window / 2;

    // Result lies between previous and next, so it always fits.
    numerator.div_euclid(window) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Smoother {
    estimate: i32,
    window: NonZeroU16,
    initialized: bool,
}

impl Smoother {
    pub fn new(window: u16) -> Result<Self> {
        match NonZeroU16::new(window) {
            Some(window) => Ok(Self::with_window(window)),
            None => {
                log::warn!("Rejected smoothing window 0");
                Err(Error::InvalidConfiguration("smoothing window must be positive"))
            }
        }
    }

    pub const fn with_window(window: NonZeroU16) -> Self {
        Self {
            estimate: 0,
            window,
            initialized: false,
        }
    }

    pub fn add_sample(&mut self, raw: i32) -> i32 {
        if !self.initialized {
            log::debug!("Smoother seeded with {}", raw);
        }

        self.estimate = smoothed_average(self.estimate, raw, !self.initialized, self.window);
        self.initialized = true;
        self.estimate
    }

    /// `None` until the first sample arrives.
    pub fn estimate(&self) -> Option<i32> {
        self.initialized.then_some(self.estimate)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn window(&self) -> u16 {
        self.window.get()
    }

    pub fn reset(&mut self) {
        self.estimate = 0;
        self.initialized = false;
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(n: u16) -> NonZeroU16 {
        NonZeroU16::new(n).unwrap()
    }

    #[test]
    fn first_sample_passes_through() {
        for w in [1, 2, 5, 64, u16::MAX] {
            assert_eq!(smoothed_average(1234, -77, true, window(w)), -77);
            assert_eq!(smoothed_average(0, 4095, true, window(w)), 4095);
        }
    }

    #[test]
    fn steady_state_is_a_fixed_point() {
        assert_eq!(smoothed_average(100, 100, false, window(5)), 100);
        for v in [-1000, -3, 0, 1, 4095, i32::MAX, i32::MIN] {
            assert_eq!(smoothed_average(v, v, false, window(5)), v);
            assert_eq!(smoothed_average(v, v, false, window(8)), v);
        }
    }

    #[test]
    fn small_step_truncates() {
        // (4 * 0 + 10 + 2) / 5
        assert_eq!(smoothed_average(0, 10, false, window(5)), 2);
        // (4 * 10 + 0 + 2) / 5
        assert_eq!(smoothed_average(10, 0, false, window(5)), 8);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(smoothed_average(0, 1, false, window(2)), 1);
        assert_eq!(smoothed_average(0, -1, false, window(2)), 0);
        assert_eq!(smoothed_average(0, -10, false, window(5)), -2);
        assert_eq!(smoothed_average(-10, 0, false, window(5)), -8);
    }

    #[test]
    fn window_of_one_tracks_raw_input() {
        assert_eq!(smoothed_average(500, 7, false, window(1)), 7);
        assert_eq!(smoothed_average(-500, -7, false, window(1)), -7);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(smoothed_average(i32::MAX, i32::MAX, false, window(u16::MAX)), i32::MAX);
        let blended = smoothed_average(i32::MIN, i32::MAX, false, window(2));
        assert_eq!(blended, 0);
    }

    #[test]
    fn constant_input_converges_without_overshoot() {
        for (start, target, w) in [(0, 100, 5), (4095, 0, 5), (-500, 37, 5), (250, -250, 8), (9, 3, 1)] {
            let mut estimate: i32 = start;
            let mut distance = (estimate - target).abs();

            for _ in 0..500 {
                estimate = smoothed_average(estimate, target, false, window(w));
                let next_distance = (estimate - target).abs();
                assert!(next_distance <= distance, "{} -> {} moved away from {}", distance, next_distance, target);
                distance = next_distance;
            }

            assert!(distance <= i32::from(w / 2), "settled {} away from {}", distance, target);
        }
    }

    #[test]
    fn same_inputs_same_output() {
        let a = smoothed_average(321, 1000, false, window(5));
        let b = smoothed_average(321, 1000, false, window(5));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_window_is_rejected() {
        assert_eq!(
            Smoother::new(0),
            Err(Error::InvalidConfiguration("smoothing window must be positive"))
        );
    }

    #[test]
    fn smoother_seeds_then_blends() {
        let mut smoother = Smoother::new(5).unwrap();
        assert_eq!(smoother.estimate(), None);
        assert!(!smoother.is_initialized());

        assert_eq!(smoother.add_sample(10), 10);
        assert_eq!(smoother.estimate(), Some(10));
        // (4 * 10 + 20 + 2) / 5
        assert_eq!(smoother.add_sample(20), 12);
        // (4 * 12 + 20 + 2) / 5
        assert_eq!(smoother.add_sample(20), 14);
    }

    #[test]
    fn reset_reseeds_on_next_sample() {
        let mut smoother = Smoother::default();
        assert_eq!(smoother.window(), DEFAULT_SMOOTHING_WINDOW);

        smoother.add_sample(100);
        smoother.add_sample(0);
        smoother.reset();

        assert_eq!(smoother.estimate(), None);
        assert_eq!(smoother.add_sample(-42), -42);
    }
}
