//! End-to-end crash scenarios: each test runs the `dnis` binary, lets it
//! deliver a signal to itself and inspects stdout and the exit status.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dnis"))
        .args(args)
        .output()
        .expect("Failed to execute dnis")
}

fn error_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| l.starts_with("[ERROR]"))
        .map(str::to_string)
        .collect()
}

#[cfg(unix)]
#[cfg(test)]
mod signal_tests {
    use super::*;
    use dnis::system::SignalKind;

    #[test]
    fn test_termination_request_logs_once_and_exits_with_signal() {
        let output = run(&["crash", "--signal", "SIGTERM", "--no-dialog"]);

        assert_eq!(output.status.code(), Some(SignalKind::Termination.raw()));
        let errors = error_lines(&output);
        assert_eq!(errors.len(), 1, "stdout: {:?}", errors);
        assert!(errors[0].ends_with("\t| Software Termination (SIGTERM)"));
        assert!(errors[0].contains("src/system/crash.rs:"));
        assert!(errors[0].contains("handle_signal"));
    }

    #[test]
    fn test_double_init_still_handles_once() {
        let output = run(&["crash", "--signal", "term", "--init-count", "2", "--no-dialog"]);

        assert_eq!(output.status.code(), Some(SignalKind::Termination.raw()));
        assert_eq!(error_lines(&output).len(), 1);
    }

    #[test]
    fn test_segmentation_violation() {
        let output = run(&["crash", "--signal", "segv", "--no-dialog"]);

        assert_eq!(output.status.code(), Some(SignalKind::SegmentationViolation.raw()));
        let errors = error_lines(&output);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Segmentation Fault (SIGSEGV)"));
    }

    #[test]
    fn test_every_supported_signal_exits_with_its_number() {
        for kind in SignalKind::supported() {
            let raw = kind.raw().to_string();
            let output = run(&["crash", "--signal", &raw, "--no-dialog"]);

            assert_eq!(output.status.code(), Some(kind.raw()), "signal {}", kind);
            let errors = error_lines(&output);
            assert_eq!(errors.len(), 1, "signal {}", kind);
            assert!(errors[0].ends_with(kind.description()));
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_stack_overflow_is_reported_and_exits_with_segv() {
        let output = run(&["overflow", "--no-dialog"]);

        assert_eq!(output.status.code(), Some(SignalKind::SegmentationViolation.raw()));
        let errors = error_lines(&output);
        assert_eq!(errors.len(), 1, "stdout: {:?}", errors);
        assert!(errors[0].ends_with("\t| Segmentation Fault (SIGSEGV)"));
    }

    #[test]
    fn test_unsupported_signal_is_rejected_by_cli() {
        let output = run(&["crash", "--signal", "SIGHUP"]);
        assert!(!output.status.success());
        assert!(error_lines(&output).is_empty());
    }
}

#[cfg(test)]
mod command_tests {
    use super::*;

    #[test]
    fn test_describe_command() {
        let output = run(&["describe", "9999"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Unknown signal (9999)");
    }

    #[test]
    fn test_describe_negative_number() {
        let output = run(&["describe", "-3"]);
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Unknown signal (-3)");
    }

    #[test]
    fn test_panic_is_reported_as_one_error_line() {
        let output = run(&["panic", "invariant broken"]);

        assert!(!output.status.success());
        let errors = error_lines(&output);
        assert_eq!(errors.len(), 1, "stdout: {:?}", errors);
        assert!(errors[0].contains("<panic>"));
        assert!(errors[0].contains("src/interfaces/cli/mod.rs:"));
        assert!(errors[0].ends_with("panicked: invariant broken"));
    }
}
