use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Workspace provisioning failures. None of these are retried; each one
/// surfaces immediately as a failed host task.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Cannot resolve artifact {coordinate} - no bundle at {}", searched.display())]
    ArtifactUnresolvable {
        coordinate: String,
        searched: PathBuf,
    },

    #[error("Bundle contains no entries under '{prefix}'")]
    BundleContentMissing { prefix: String },

    #[error("Malformed workspace bundle - {0}")]
    MalformedBundle(String),

    #[error("Failed to write workspace files")]
    Io(#[from] std::io::Error),

    #[error("Failed to mark wrapper launcher executable - {}", path.display())]
    WrapperPermissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy-in/copy-out failures. A rerun self-heals because the input copy
/// always deletes before recopying.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Relay copy failed")]
    Io(#[from] std::io::Error),

    #[error("Destination file already exists - {}", path.display())]
    DuplicateEntry { path: PathBuf },
}

/// Delegated build failures: the nested process exited non-zero or the wait
/// timed out. Always fatal to the generation step.
#[derive(Debug, Error)]
pub enum DelegatedBuildError {
    #[error("Failed to prepare nested build log files")]
    Logs(#[source] std::io::Error),

    #[error("Failed to launch nested build wrapper")]
    Launch(#[source] std::io::Error),

    #[error("{}", non_zero_exit_message(code, error_log, log_excerpt))]
    NonZeroExit {
        code: i32,
        error_log: PathBuf,
        log_excerpt: Option<String>,
    },

    #[error(
        "Nested build did not complete within {}s; the child process was killed (error log: {})",
        limit.as_secs(),
        error_log.display()
    )]
    TimedOut { limit: Duration, error_log: PathBuf },
}

fn non_zero_exit_message(code: &i32, error_log: &Path, log_excerpt: &Option<String>) -> String {
    match log_excerpt {
        Some(excerpt) => format!(
            "Nested build failed with exit code {code} (error log: {}):\n{excerpt}",
            error_log.display()
        ),
        None => format!("Nested build failed with exit code {code} (no error log was written)"),
    }
}
