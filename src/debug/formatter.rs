/*
    Debug Formatter
      Owns the tick counter and the output column that wrap the
      progress dots, so no trace state lives in globals.
*/

use core::fmt::{self, Write};

use embedded_hal_1::delay::DelayNs;

use super::DebugChannel;
use crate::config::{DebugConfig, DEBUG_LINE_CAPACITY};
use crate::error::{Error, Result};

/* --------------------------- Code -------------------------- */

/// Keeps the longest prefix that fits, one char at a time.
#[derive(Default)]
struct LineBuffer<const N: usize> {
    text: heapless::String<N>,
}

impl<const N: usize> Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.push(c).is_err() {
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}

pub struct DebugFormatter<C, D> {
    channel: C,
    delay: D,
    config: DebugConfig,
    tick: u32,
    column: u16,
}

impl<C: DebugChannel, D: DelayNs> DebugFormatter<C, D> {
    pub fn new(channel: C, delay: D, config: DebugConfig) -> Result<Self> {
        if config.tick_interval == 0 {
            log::warn!("Rejected debug tick interval 0");
            return Err(Error::InvalidConfiguration("tick interval must be positive"));
        }

        log::debug!(
            "Debug trace serial={} debug={} wrap={}",
            config.serial_enabled,
            config.debug_enabled,
            config.max_line_len
        );

        Ok(Self {
            channel,
            delay,
            config,
            tick: 0,
            column: 0,
        })
    }

    /// Counts one unit of progress; a dot appears every `tick_interval` calls.
    pub fn tick(&mut self) {
        if !self.config.tracing() {
            return;
        }

        self.tick = self.tick.wrapping_add(1);
        if self.tick % self.config.tick_interval == 0 {
            self.channel.print_char('.');
            self.column = self.column.saturating_add(1);
        }

        if self.column > self.config.max_line_len {
            self.column = 0;
            self.channel.print_line("");
        }

        self.flush();
    }

    pub fn line(&mut self, msg: &str) {
        if self.config.tracing() {
            self.channel.print_line(msg);
        }
    }

    /// Formats into a bounded buffer; text past the capacity is cut off.
    pub fn line_fmt(&mut self, args: fmt::Arguments<'_>) {
        if !self.config.tracing() {
            return;
        }

        let mut line = LineBuffer::<DEBUG_LINE_CAPACITY>::default();
        let _ = line.write_fmt(args);
        self.channel.print_line(&line.text);
    }

    pub fn flush(&mut self) {
        if !self.config.serial_enabled {
            return;
        }

        self.channel.flush();
        self.delay.delay_ms(self.config.flush_settle_ms);
    }

    pub fn ticks(&self) -> u32 {
        self.tick
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn config(&self) -> &DebugConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_parts(self) -> (C, D) {
        (self.channel, self.delay)
    }
}
