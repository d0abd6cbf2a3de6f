use std::path::{Path, PathBuf};

use crate::SourceSet;

/// Directory under the workspace holding the nested build's log files.
pub const LOG_DIR_NAME: &str = "_out";

/// Nested build stdout capture.
pub const DEBUG_LOG_NAME: &str = "debug-out.txt";

/// Nested build stderr capture.
pub const ERROR_LOG_NAME: &str = "error-out.txt";

/// A provisioned nested build directory on disk.
///
/// Created once per host build invocation; never deleted mid-run. The only
/// supported destruction path is the clean command. All state lives on the
/// filesystem, so every accessor re-derives paths from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedWorkspace {
    root: PathBuf,
}

impl ProvisionedWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR_NAME)
    }

    #[must_use]
    pub fn debug_log(&self) -> PathBuf {
        self.log_dir().join(DEBUG_LOG_NAME)
    }

    #[must_use]
    pub fn error_log(&self) -> PathBuf {
        self.log_dir().join(ERROR_LOG_NAME)
    }

    /// Transient copy-in target for the host's proto sources, deleted and
    /// recreated on every relay pass.
    #[must_use]
    pub fn proto_input_dir(&self, source_set: SourceSet) -> PathBuf {
        self.root
            .join("src")
            .join(source_set.dir_name())
            .join("proto")
    }

    /// Copy-out source holding the nested build's generated files.
    #[must_use]
    pub fn generated_dir(&self, source_set: SourceSet) -> PathBuf {
        self.root.join("generated").join(source_set.dir_name())
    }

    #[must_use]
    pub fn wrapper_jar(&self) -> PathBuf {
        self.root.join("gradle").join("wrapper").join("gradle-wrapper.jar")
    }
}
