use std::path::{Path, PathBuf};

use protobridge_core::{HostContext, ProvisionedWorkspace, WorkspaceConfig};

use crate::build_args;

/// Select the platform-appropriate wrapper launcher inside the workspace.
#[must_use]
pub fn launcher_path(workspace_dir: &Path, windows: bool) -> PathBuf {
    if windows {
        workspace_dir.join("gradlew.bat")
    } else {
        workspace_dir.join("gradlew")
    }
}

/// Everything needed to launch the nested build, assembled in one place so
/// platform branching never leaks into call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildProcessSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
    pub stdout_path: PathBuf,
    pub stderr_path: PathBuf,
}

impl ChildProcessSpec {
    pub fn for_workspace(
        config: &WorkspaceConfig,
        workspace: &ProvisionedWorkspace,
        host: &dyn HostContext,
    ) -> Self {
        Self {
            program: launcher_path(workspace.root(), cfg!(windows)),
            args: build_args(config, host),
            current_dir: workspace.root().to_path_buf(),
            stdout_path: workspace.debug_log(),
            stderr_path: workspace.error_log(),
        }
    }
}
