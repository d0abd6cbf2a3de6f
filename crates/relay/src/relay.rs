use std::path::Path;

use futures::try_join;
use protobridge_core::{CopySpec, DuplicatePolicy, ProvisionedWorkspace, RelayError, SourceSet};
use tokio::fs::remove_dir_all;

use crate::copy_tree;

/// Copy the host module's proto sources into the workspace input locations.
///
/// Each source set's previous copy is deleted first, so no stale schema file
/// survives into a regenerate run. A source set missing on the host side is
/// simply skipped. Must complete fully before the nested build is launched.
pub async fn copy_in(
    source_module_dir: &Path,
    workspace: &ProvisionedWorkspace,
) -> Result<(), RelayError> {
    try_join!(
        copy_in_source_set(source_module_dir, workspace, SourceSet::Main),
        copy_in_source_set(source_module_dir, workspace, SourceSet::Test),
    )?;
    Ok(())
}

async fn copy_in_source_set(
    source_module_dir: &Path,
    workspace: &ProvisionedWorkspace,
    source_set: SourceSet,
) -> Result<(), RelayError> {
    let host_protos = source_module_dir
        .join("src")
        .join(source_set.dir_name())
        .join("proto");
    let workspace_protos = workspace.proto_input_dir(source_set);

    match remove_dir_all(&workspace_protos).await {
        Ok(()) => {}
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => return Err(error.into()),
    }
    if !host_protos.is_dir() {
        return Ok(());
    }

    copy_tree(&CopySpec::new(
        host_protos,
        workspace_protos,
        DuplicatePolicy::Overwrite,
    ))
    .await?;
    Ok(())
}

/// Copy the workspace's generated output back into the host module.
///
/// Runs only after the delegated build reported success. SkipExisting keeps
/// outputs of an earlier, partially successful pass intact and lets
/// independent generation passes accumulate without collision.
pub async fn copy_out(
    workspace: &ProvisionedWorkspace,
    source_module_dir: &Path,
) -> Result<u64, RelayError> {
    let mut copied = 0;
    for source_set in SourceSet::ALL {
        let generated = workspace.generated_dir(source_set);
        if !generated.is_dir() {
            continue;
        }
        copied += copy_tree(&CopySpec::new(
            generated,
            source_module_dir.join("generated").join(source_set.dir_name()),
            DuplicatePolicy::SkipExisting,
        ))
        .await?;
    }
    Ok(copied)
}
