//! Exit codes for the CLI tool.

use fsweep::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 1;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 2;
/// Invalid archive destination
pub const BAD_DESTINATION: i32 = 3;
/// Ctrl+C (128 + SIGINT)
pub const USER_INTERRUPT: i32 = 130;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)] // BadArgs and UserInterrupt are exited directly, not returned
pub enum ExitCode {
    Success,
    FatalError,
    BadArgs,
    BadDestination,
    UserInterrupt,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::FatalError => FATAL_ERROR,
            Self::BadArgs => BAD_ARGS,
            Self::BadDestination => BAD_DESTINATION,
            Self::UserInterrupt => USER_INTERRUPT,
        }
    }
}

/// Converts a sweep error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::DestinationNotDirectory { .. } => ExitCode::BadDestination,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
