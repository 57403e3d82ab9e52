//! Tests for src/error/mod.rs - PodctlError

use podctl::error::PodctlError;

// ============================================================================
// PodctlError Display tests
// ============================================================================

#[test]
fn test_config_error_display() {
    let err = PodctlError::Config("Failed to read kubeconfig".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("Failed to read kubeconfig"));
}

#[test]
fn test_cancelled_error_display() {
    let err = PodctlError::Cancelled;
    let display = format!("{}", err);
    assert!(display.contains("Selection cancelled"));
}

#[test]
fn test_no_options_error_display() {
    let err = PodctlError::NoOptions { kind: "pods" };
    let display = format!("{}", err);
    assert!(display.contains("Nothing to select"));
    assert!(display.contains("pods"));
}

#[test]
fn test_prompt_error_display() {
    let err = PodctlError::Prompt("terminal not interactive".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Selection failed"));
    assert!(display.contains("terminal not interactive"));
}

#[test]
fn test_shell_exit_error_display() {
    let err = PodctlError::ShellExit { code: 137 };
    let display = format!("{}", err);
    assert!(display.contains("Shell session exited"));
    assert!(display.contains("137"));
}

// ============================================================================
// Exit code mapping
// ============================================================================

#[test]
fn test_shell_exit_propagates_subprocess_code() {
    let err = PodctlError::ShellExit { code: 42 };
    assert_eq!(err.exit_code(), 42);
}

#[test]
fn test_cancellation_exits_with_one() {
    assert_eq!(PodctlError::Cancelled.exit_code(), 1);
}

#[test]
fn test_fatal_errors_exit_with_one() {
    let err = PodctlError::Config("bad".to_string());
    assert_eq!(err.exit_code(), 1);

    let err = PodctlError::NoOptions { kind: "namespaces" };
    assert_eq!(err.exit_code(), 1);
}

// ============================================================================
// From conversions
// ============================================================================

#[test]
fn test_from_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "kubectl not found");
    let err: PodctlError = io_err.into();

    if let PodctlError::Io(e) = err {
        assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
    } else {
        panic!("Expected PodctlError::Io");
    }
}
