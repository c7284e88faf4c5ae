use std::fmt;
use std::io::{self, Write};

use super::format::write_line;
use super::{CallSite, Severity};

/// Write one record to standard output.
///
/// The line is rendered before stdout is locked, so the caller's `Display`
/// code never runs under the lock, then handed over in a single `write_all`.
/// Failures are dropped: a broken stdout must never turn into an error on the
/// caller's side.
pub fn log(level: Severity, site: &CallSite<'_>, message: impl fmt::Display) {
    let line = render(level, site, message);
    let _ = io::stdout().lock().write_all(line.as_bytes());
}

/// Same as [`log`], into an arbitrary writer.
pub fn log_to<W: Write + ?Sized>(
    out: &mut W,
    level: Severity,
    site: &CallSite<'_>,
    message: impl fmt::Display,
) {
    let line = render(level, site, message);
    let _ = out.write_all(line.as_bytes());
}

fn render(level: Severity, site: &CallSite<'_>, message: impl fmt::Display) -> String {
    let mut line = String::new();
    if write_line(&mut line, level, site, message).is_err() {
        // A Display impl reported an error; keep whatever was rendered.
        if !line.ends_with('\n') {
            line.push('\n');
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("sink closed"))
        }
    }

    #[test]
    fn test_log_to_writes_one_line() {
        let mut out = Vec::new();
        let site = CallSite::new("src/lib.rs", 3, "demo::f");
        log_to(&mut out, Severity::Info, &site, "ready");

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "[INFO]\t| src/lib.rs:3 demo::f \t| ready\n");
    }

    #[test]
    fn test_log_to_swallows_sink_errors() {
        let site = CallSite::new("src/lib.rs", 3, "demo::f");
        log_to(&mut Broken, Severity::Error, &site, "lost");
    }

    #[test]
    fn test_log_to_accepts_format_args() {
        let mut out = Vec::new();
        let site = CallSite::new("a.rs", 1, "m::f");
        log_to(&mut out, Severity::Debug, &site, format_args!("{} + {}", 1, 2));
        assert!(String::from_utf8(out).unwrap().ends_with("\t| 1 + 2\n"));
    }

    struct Reentrant;

    impl fmt::Display for Reentrant {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            // stdout's lock is reentrant, so take it from another thread.
            // Hangs if `log` holds it while rendering.
            let _ = std::thread::spawn(|| io::stdout().lock().flush()).join();
            f.write_str("rendered")
        }
    }

    #[test]
    fn test_log_renders_before_locking_stdout() {
        log(Severity::Info, &crate::call_site!(), Reentrant);
    }

    #[test]
    fn test_log_to_stdout_does_not_panic() {
        log(Severity::Debug, &crate::call_site!(), "stdout smoke test");
    }
}
