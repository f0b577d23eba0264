//! Error types for the scaffolding flow

use thiserror::Error;

/// Errors with dedicated handling at the top level. Everything else travels
/// as `anyhow::Error` and terminates the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user backed out at a prompt or chose to cancel
    #[error("operation cancelled")]
    Cancelled,
}

/// Whether an error represents user cancellation: either the explicit
/// [`ScaffoldError::Cancelled`] signal or the `Interrupted` io error cliclack
/// prompts return when the user hits ESC/Ctrl-C.
pub fn is_cancelled(err: &anyhow::Error) -> bool {
    if matches!(err.downcast_ref::<ScaffoldError>(), Some(ScaffoldError::Cancelled)) {
        return true;
    }
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::Interrupted)
}
