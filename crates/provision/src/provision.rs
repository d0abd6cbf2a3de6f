use std::path::{Component, Path};

use protobridge_core::{ProvisionError, ProvisionedWorkspace, WorkspaceConfig};
use tokio::fs::{create_dir_all, write};

use crate::ResourceLister;

/// Fixed path prefix inside the bundle holding the workspace template tree.
pub const BUNDLE_PREFIX: &str = "codegen-workspace/";

/// Transport name of the wrapper jar inside the bundle. Bundling tools may
/// merge or flatten nested jar entries, so the wrapper travels renamed and
/// untouched, and is restored to its real path at unpack time.
pub const WRAPPER_TRANSPORT_NAME: &str = "gradle-wrapper.raw";

const WRAPPER_RESTORED_PATH: &str = "gradle/wrapper/gradle-wrapper.jar";

/// Materialize the nested build workspace from a bundle.
///
/// One-shot per host build invocation: re-provisioning over a live workspace
/// is not guaranteed safe, and nothing here deletes an existing tree.
///
/// # Errors
/// Returns error if the bundle has no entries under [`BUNDLE_PREFIX`] or a
/// destination file cannot be written.
pub async fn provision(
    config: &WorkspaceConfig,
    lister: &dyn ResourceLister,
) -> Result<ProvisionedWorkspace, ProvisionError> {
    let entries = lister.list(BUNDLE_PREFIX);
    if entries.is_empty() {
        return Err(ProvisionError::BundleContentMissing {
            prefix: BUNDLE_PREFIX.to_string(),
        });
    }

    for entry in &entries {
        let Some(relative) = entry.strip_prefix(BUNDLE_PREFIX) else {
            continue;
        };
        let relative = if relative == WRAPPER_TRANSPORT_NAME {
            WRAPPER_RESTORED_PATH
        } else {
            relative
        };
        // Entry names come straight out of the bundle; a `..` or absolute
        // segment would land the write outside the workspace.
        let relative = Path::new(relative);
        if relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(ProvisionError::MalformedBundle(format!(
                "entry path escapes the workspace: {entry}"
            )));
        }
        let target = config.workspace_dir.join(relative);
        if let Some(parent) = target.parent() {
            create_dir_all(parent).await?;
        }
        write(&target, lister.open(entry)?).await?;
    }

    Ok(ProvisionedWorkspace::new(&config.workspace_dir))
}
