use std::fs::File;
use std::process::Stdio;

use protobridge_core::{
    DelegatedBuildError, ExecutionResult, HostContext, ProvisionedWorkspace, WorkspaceConfig,
};
use tokio::process::Command;
use tokio::time::timeout;

use crate::ChildProcessSpec;

/// Run the nested build and classify its outcome.
///
/// Log files are truncated up front so logs never mix across invocations;
/// the child's stdout and stderr go to those files rather than the console
/// to avoid interleaving with the host build's own output. The wait is
/// bounded by the configured timeout; on expiry the child is killed before
/// the error is returned, so an exit status is never read from a process
/// that is still running.
///
/// # Errors
/// Returns [`DelegatedBuildError`] on launch failure, non-zero exit, or
/// timeout. Success requires both a completed wait and exit code zero.
pub async fn run(
    config: &WorkspaceConfig,
    workspace: &ProvisionedWorkspace,
    host: &dyn HostContext,
) -> Result<ExecutionResult, DelegatedBuildError> {
    let spec = ChildProcessSpec::for_workspace(config, workspace, host);

    let (debug_file, error_file) = prepare_logs(workspace).map_err(DelegatedBuildError::Logs)?;

    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.current_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(debug_file))
        .stderr(Stdio::from(error_file))
        .spawn()
        .map_err(DelegatedBuildError::Launch)?;

    let status = match timeout(config.max_duration, child.wait()).await {
        Ok(wait_result) => wait_result.map_err(DelegatedBuildError::Launch)?,
        Err(_elapsed) => {
            // Never read the exit status of a live process; kill it and
            // report the incomplete wait. The kill can only fail if the
            // child exited in the meantime, which changes nothing here.
            child.kill().await.ok();
            return Err(DelegatedBuildError::TimedOut {
                limit: config.max_duration,
                error_log: workspace.error_log(),
            });
        }
    };

    if status.success() {
        Ok(ExecutionResult {
            exit_code: Some(0),
            completed: true,
            debug_log: workspace.debug_log(),
            error_log: workspace.error_log(),
        })
    } else {
        Err(DelegatedBuildError::NonZeroExit {
            code: status.code().unwrap_or(-1),
            error_log: workspace.error_log(),
            log_excerpt: read_error_log(workspace),
        })
    }
}

fn prepare_logs(workspace: &ProvisionedWorkspace) -> std::io::Result<(File, File)> {
    std::fs::create_dir_all(workspace.log_dir())?;
    Ok((
        File::create(workspace.debug_log())?,
        File::create(workspace.error_log())?,
    ))
}

fn read_error_log(workspace: &ProvisionedWorkspace) -> Option<String> {
    std::fs::read_to_string(workspace.error_log())
        .ok()
        .filter(|content| !content.trim().is_empty())
}
