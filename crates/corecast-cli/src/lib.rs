pub mod config;
pub mod console;
pub mod error;
pub mod preflight;
pub mod render;
pub mod review;
pub mod session;
pub mod signal;
pub mod transcript;

pub use error::{ConfigError, SessionError};

/// Process status for a clean run, including an operator interrupt.
pub const EXIT_OK: u8 = 0;
/// Process status for any other top-level error.
pub const EXIT_FAILURE: u8 = 1;

/// True when the error chain carries [`SessionError::Interrupted`].
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<SessionError>(),
        Some(SessionError::Interrupted)
    )
}

/// Map the outcome of a run to the process exit status.
pub fn exit_status(result: &anyhow::Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_OK,
        Err(e) if is_interrupted(e) => EXIT_OK,
        Err(_) => EXIT_FAILURE,
    }
}
