//! End-to-end tests for the `dfi-supply` binary

use std::process::{Command, Output};

fn dfi_supply(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dfi-supply"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn dfi-supply")
}

fn dfi_supply_with_log(args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dfi-supply"))
        .args(args)
        .env("RUST_LOG", filter)
        .output()
        .expect("spawn dfi-supply")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

mod success_tests {
    use super::*;

    #[test]
    fn test_supply_lines() {
        let cases = [
            ("0", "322387195.02173325\n"),
            ("1", "322387395.02173325\n"),
            ("894000", "501187195.02173325\n"),
            ("894001", "501187600.06173325\n"),
            ("926690", "514427952.62173325\n"),
            ("18446744073709551615", "1299785372.75004925\n"),
        ];

        for (height, expected) in cases {
            let output = dfi_supply(&[height]);
            assert_eq!(output.status.code(), Some(0), "height {height}");
            assert_eq!(stdout(&output), expected, "height {height}");
            assert!(output.stderr.is_empty(), "height {height}: {}", stderr(&output));
        }
    }

    #[test]
    fn test_repeated_runs_identical() {
        let first = dfi_supply(&["5000000"]);
        let second = dfi_supply(&["5000000"]);

        assert_eq!(first.status.code(), Some(0));
        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let output = dfi_supply(&["000894000"]);
        assert_eq!(stdout(&output), "501187195.02173325\n");
    }
}

mod usage_tests {
    use super::*;

    fn assert_usage_error(args: &[&str]) {
        assert_usage_output(args, &dfi_supply(args));
    }

    fn assert_usage_output(args: &[&str], output: &Output) {
        assert_eq!(output.status.code(), Some(1), "args {args:?}");
        assert!(output.stdout.is_empty(), "args {args:?} wrote to stdout");

        let err = stderr(output);
        assert!(err.starts_with("Usage: "), "args {args:?}: {err}");
        assert!(err.ends_with(" <height>\n"), "args {args:?}: {err}");
        assert_eq!(err.lines().count(), 1, "args {args:?}: {err}");
    }

    #[test]
    fn test_missing_argument() {
        assert_usage_error(&[]);
    }

    #[test]
    fn test_extra_argument() {
        assert_usage_error(&["1", "2"]);
    }

    #[test]
    fn test_negative_height() {
        assert_usage_error(&["-5"]);
    }

    #[test]
    fn test_non_integer_height() {
        assert_usage_error(&["12.5"]);
        assert_usage_error(&["twelve"]);
        assert_usage_error(&["+12"]);
        assert_usage_error(&[""]);
    }

    #[test]
    fn test_height_beyond_u64() {
        assert_usage_error(&["18446744073709551616"]);
    }

    #[test]
    fn test_help_and_version_flags_are_usage_errors() {
        for flag in ["--help", "-h", "--version", "-V"] {
            assert_usage_error(&[flag]);
        }
    }

    #[test]
    fn test_verbose_logging_keeps_usage_line_alone() {
        let args = ["not-a-height"];
        let output = dfi_supply_with_log(&args, "trace");
        assert_usage_output(&args, &output);
    }
}

mod logging_tests {
    use super::*;

    #[test]
    fn test_logging_never_touches_stdout() {
        let output = dfi_supply_with_log(&["50000000"], "trace");

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout(&output), "1299785372.75004925\n");
    }
}
