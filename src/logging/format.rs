//! Line formatting
//!
//! Every record renders to exactly one line:
//!
//! ```text
//! <LABEL>\t| <file>:<line> <function> \t| <message>\n
//! ```
//!
//! The layout is stable; tooling may split on `"\t| "`.

use std::fmt::{self, Write};

use super::{CallSite, Severity};

/// Separator between the three fields of a line.
pub const FIELD_SEPARATOR: &str = "\t| ";

/// Decorated label for a level.
pub const fn label_for(level: Severity) -> &'static str {
    match level {
        Severity::Debug => "[DEBUG]",
        Severity::Info => "[INFO]",
        Severity::Warning => "[WARNING]",
        Severity::Error => "[ERROR]",
        Severity::Unknown => "[UNKNOWN]",
    }
}

/// Write one line, terminator included, into any `fmt::Write`.
pub fn write_line<W: Write + ?Sized>(
    out: &mut W,
    level: Severity,
    site: &CallSite<'_>,
    message: impl fmt::Display,
) -> fmt::Result {
    writeln!(
        out,
        "{}{sep}{} {sep}{}",
        label_for(level),
        site,
        message,
        sep = FIELD_SEPARATOR
    )
}

/// Render one line into a fresh `String`.
pub fn render_line(level: Severity, site: &CallSite<'_>, message: &str) -> String {
    let mut line = String::with_capacity(
        label_for(level).len() + site.file().len() + site.function().len() + message.len() + 24,
    );
    // Writing into a String cannot fail.
    let _ = write_line(&mut line, level, site, message);
    line
}

/// Fixed-capacity line buffer living on the stack.
///
/// Output past the capacity is dropped and the final byte is replaced by a
/// newline, so a truncated record is still one line. Never allocates.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Make sure the content ends with a line terminator.
    pub fn terminate(&mut self) {
        if N == 0 {
            return;
        }
        if self.len == 0 || self.buf[self.len - 1] != b'\n' {
            if self.len == N {
                self.buf[N - 1] = b'\n';
            } else {
                self.buf[self.len] = b'\n';
                self.len += 1;
            }
        }
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.len;
        let take = s.len().min(room);
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}
