//! Process exit codes.
//!
//! Invariants:
//! - A run either fully succeeds (0) or fails (1); there are no partial codes.

/// Exit codes shared by both binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The run completed.
    Success = 0,

    /// Any failure: config, transport, job state, timeout or output.
    GeneralError = 1,
}

impl ExitCode {
    /// Exit code for the outcome of a run.
    pub fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ExitCode::Success,
            Err(_) => ExitCode::GeneralError,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
