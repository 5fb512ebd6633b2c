/*
*  Default Node Config
*/

/* --------------------------- Smoothing -------------------------- */
pub const DEFAULT_SMOOTHING_WINDOW: u16 = 5; // Samples the running average effectively spans

/* --------------------------- Debug Trace -------------------------- */
pub const MAX_LINE_LEN: u16 = 79; // Column after which the tick trace wraps
pub const TICK_DOT_INTERVAL: u32 = 20; // One '.' every N ticks
pub const FLUSH_SETTLE_MS: u32 = 2; // Let the TX buffer drain before sleeping
pub const DEBUG_LINE_CAPACITY: usize = 128;

/* --------------------------- Runtime Debug Config -------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebugConfig {
    pub serial_enabled: bool,
    pub debug_enabled: bool,
    pub max_line_len: u16,
    pub tick_interval: u32,
    pub flush_settle_ms: u32,
}

impl DebugConfig {
    pub const fn new() -> Self {
        Self {
            serial_enabled: true,
            debug_enabled: true,
            max_line_len: MAX_LINE_LEN,
            tick_interval: TICK_DOT_INTERVAL,
            flush_settle_ms: FLUSH_SETTLE_MS,
        }
    }

    /// Serial on, debug trace off.
    pub const fn quiet() -> Self {
        Self {
            debug_enabled: false,
            ..Self::new()
        }
    }

    /// Everything off.
    pub const fn disabled() -> Self {
        Self {
            serial_enabled: false,
            debug_enabled: false,
            ..Self::new()
        }
    }

    pub const fn with_max_line_len(mut self, max_line_len: u16) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub const fn with_tick_interval(mut self, tick_interval: u32) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub const fn with_flush_settle_ms(mut self, flush_settle_ms: u32) -> Self {
        self.flush_settle_ms = flush_settle_ms;
        self
    }

    pub fn tracing(&self) -> bool {
        self.serial_enabled && self.debug_enabled
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_node_constants() {
        let config = DebugConfig::default();
        assert!(config.tracing());
        assert_eq!(config.max_line_len, 79);
        assert_eq!(config.tick_interval, 20);
        assert_eq!(config.flush_settle_ms, 2);
    }

    #[test]
    fn tracing_needs_serial_and_debug() {
        assert!(!DebugConfig::quiet().tracing());
        assert!(DebugConfig::quiet().serial_enabled);
        assert!(!DebugConfig::disabled().tracing());

        let serial_off = DebugConfig { serial_enabled: false, ..DebugConfig::new() };
        assert!(!serial_off.tracing());
    }
}
