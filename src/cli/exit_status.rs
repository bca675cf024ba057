use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): every file scanned clean
/// - `Failure` (1): untranslated literals were found, or `init` found an existing config
/// - `Error` (2): the run could not proceed (bad config, invalid pattern)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished check. Unreadable files alone do not fail the run.
    pub fn from_literal_count(count: usize) -> Self {
        if count > 0 { Self::Failure } else { Self::Success }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
