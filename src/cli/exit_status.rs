use std::process::ExitCode;

/// How a zaplint run ends.
///
/// - `Success` (0): every dump was analyzed and nothing needs attention
/// - `Failure` (1): diagnostics were reported, or `fix` has pending edits
/// - `Error` (2): a dump was unreadable, or the run aborted on bad config/IO
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Unreadable dumps take precedence over findings.
    pub fn from_outcome(parse_errors: usize, has_findings: bool) -> Self {
        if parse_errors > 0 {
            ExitStatus::Error
        } else if has_findings {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
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
