use anyhow::Result;
use thiserror::Error;

/// Error type for user cancellation (Ctrl+C or ESC)
#[derive(Debug, Error)]
#[error("")]
pub struct UserCancelled;

/// Ask for a yes/no confirmation, mapping cancellation to [`UserCancelled`].
///
/// # Errors
/// Returns error if the user cancels or the interaction fails.
pub fn confirm(message: &str) -> Result<bool> {
    match inquire::Confirm::new(message).prompt() {
        Ok(answer) => Ok(answer),
        Err(
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted,
        ) => Err(UserCancelled.into()),
        Err(error) => Err(error.into()),
    }
}
