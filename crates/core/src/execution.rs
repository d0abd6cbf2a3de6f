use std::path::PathBuf;

/// Outcome of one delegated build invocation.
///
/// Produced once per run and immutable after creation. `completed` is false
/// when the wait timed out; in that case `exit_code` is `None` because the
/// child was killed without ever reporting a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: Option<i32>,
    pub completed: bool,
    pub debug_log: PathBuf,
    pub error_log: PathBuf,
}

impl ExecutionResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.completed && self.exit_code == Some(0)
    }
}
