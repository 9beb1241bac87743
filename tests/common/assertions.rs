//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Stack configured");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that output does NOT contain a pattern.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a project file exists and contains a pattern.
///
/// # Example
/// ```ignore
/// assert_file_contains!(env, "docker-compose.yml", "\"3000:8080\"");
/// ```
#[macro_export]
macro_rules! assert_file_contains {
    ($env:expr, $path:expr, $pattern:expr) => {
        let content = $env.read($path);
        assert!(
            content.contains($pattern),
            "Expected '{}' to contain '{}'\ncontent:\n{}",
            $path,
            $pattern,
            content
        );
    };
}

/// Assert that the command exited with the given code.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
