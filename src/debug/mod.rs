/*
* Debug Channel
*   print / print_char / print_line / flush over whatever transport the
*   node has. Pick NoopChannel at startup to silence tracing entirely.
*/

use core::fmt::Write;

pub mod formatter;

pub use formatter::*;

pub trait DebugChannel {
    fn print(&mut self, text: &str);
    fn print_char(&mut self, c: char);
    fn print_line(&mut self, text: &str);
    fn flush(&mut self);
}

impl<C: DebugChannel + ?Sized> DebugChannel for &mut C {
    fn print(&mut self, text: &str) {
        (**self).print(text)
    }

    fn print_char(&mut self, c: char) {
        (**self).print_char(c)
    }

    fn print_line(&mut self, text: &str) {
        (**self).print_line(text)
    }

    fn flush(&mut self) {
        (**self).flush()
    }
}

/* --------------------------- No-op -------------------------- */
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChannel;

impl DebugChannel for NoopChannel {
    fn print(&mut self, _text: &str) {}
    fn print_char(&mut self, _c: char) {}
    fn print_line(&mut self, _text: &str) {}
    fn flush(&mut self) {}
}

/* --------------------------- fmt::Write sink -------------------------- */
pub struct WriterChannel<W> {
    writer: W,
}

impl<W: Write> WriterChannel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

// Trace output is best-effort; a full or broken sink drops text.
impl<W: Write> DebugChannel for WriterChannel<W> {
    fn print(&mut self, text: &str) {
        let _ = self.writer.write_str(text);
    }

    fn print_char(&mut self, c: char) {
        let _ = self.writer.write_char(c);
    }

    fn print_line(&mut self, text: &str) {
        let _ = self.writer.write_str(text);
        let _ = self.writer.write_str("\r\n");
    }

    fn flush(&mut self) {}
}

/* --------------------------- log facade -------------------------- */
/// Collects text until a line completes, then emits it as one `log` record.
pub struct LogChannel<const N: usize> {
    line: heapless::String<N>,
    level: log::Level,
}

impl<const N: usize> LogChannel<N> {
    pub const fn new(level: log::Level) -> Self {
        Self {
            line: heapless::String::new(),
            level,
        }
    }

    pub fn pending(&self) -> &str {
        self.line.as_str()
    }

    fn emit(&mut self) {
        log::log!(self.level, "{}", self.line);
        self.line.clear();
    }

    fn append(&mut self, text: &str) {
        if self.line.push_str(text).is_ok() {
            return;
        }

        if !self.line.is_empty() {
            self.emit();
        }

        if self.line.push_str(text).is_err() {
            log::log!(self.level, "{}", text);
        }
    }
}

impl<const N: usize> Default for LogChannel<N> {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl<const N: usize> DebugChannel for LogChannel<N> {
    fn print(&mut self, text: &str) {
        self.append(text);
    }

    fn print_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.append(c.encode_utf8(&mut buf));
    }

    fn print_line(&mut self, text: &str) {
        self.append(text);
        self.emit();
    }

    // The logger backend owns draining; a partial line stays pending.
    fn flush(&mut self) {}
}
