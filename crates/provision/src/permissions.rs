use protobridge_core::{ProvisionError, ProvisionedWorkspace};

/// Mark the unix wrapper launcher executable; a no-op on Windows.
///
/// Failure is fatal: a launcher that cannot be executed would only fail
/// later inside the runner with a far less useful diagnostic.
#[cfg(unix)]
pub fn make_launcher_executable(workspace: &ProvisionedWorkspace) -> Result<(), ProvisionError> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let launcher = workspace.root().join("gradlew");
    fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755)).map_err(|source| {
        ProvisionError::WrapperPermissions {
            path: launcher,
            source,
        }
    })
}

#[cfg(not(unix))]
pub fn make_launcher_executable(_workspace: &ProvisionedWorkspace) -> Result<(), ProvisionError> {
    Ok(())
}
