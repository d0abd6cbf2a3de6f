use std::path::Path;

use anyhow::{Context, Result};
use protobridge_core::WorkspaceConfig;
use protobridge_provision::{
    ArchiveResourceLister, ArtifactResolver, EmbeddedResourceLister, LocalRepositoryResolver,
    ResourceLister,
};

use crate::CommandContext;
use crate::options::ProvisionMode;

/// Build the [`ResourceLister`] for the selected provisioning mode.
pub async fn bundle_lister(
    context: &CommandContext,
    workspace_config: &WorkspaceConfig,
    mode: &ProvisionMode,
) -> Result<Box<dyn ResourceLister>> {
    match mode {
        ProvisionMode::Bundled => Ok(Box::new(EmbeddedResourceLister::new())),
        ProvisionMode::Artifact => {
            let repository_root = context
                .config
                .artifact_repository
                .as_ref()
                .map_or_else(
                    || context.host_root.join(".protobridge").join("repository"),
                    |repository| resolve_repository_path(&context.host_root, repository),
                );
            let resolver = LocalRepositoryResolver::new(repository_root);
            let bundle = resolver
                .resolve(&workspace_config.target_artifact)
                .await
                .context("Failed to resolve the codegen plugins bundle")?;
            Ok(Box::new(ArchiveResourceLister::from_path(&bundle)?))
        }
    }
}

fn resolve_repository_path(host_root: &Path, repository: &str) -> std::path::PathBuf {
    let path = Path::new(repository);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        host_root.join(path)
    }
}
