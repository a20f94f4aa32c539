use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, diagnostics or not
/// - `Error` (2): Command failed (config error, unreadable input, write failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command failed with a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
