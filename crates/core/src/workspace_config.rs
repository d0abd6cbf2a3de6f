use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::{ArtifactCoordinate, Config};

/// Directory under the host build output area holding the nested workspace.
pub const WORKSPACE_DIR_NAME: &str = "codegen-workspace";

/// Host build output directory the workspace must live under.
pub const HOST_BUILD_DIR: &str = "build";

/// Resolved per-invocation configuration for provisioning and running the
/// nested build.
///
/// Built from the host root and the loaded [`Config`]; the workspace
/// directory is always derived, never user-supplied, which keeps the
/// containment invariant (workspace under `<host>/build/`) by construction.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    pub workspace_dir: PathBuf,
    pub source_module_dir: PathBuf,
    pub target_artifact: ArtifactCoordinate,
    pub extra_dependencies: Vec<String>,
    pub task_names: Vec<String>,
    pub max_duration: Duration,
    pub forwarded_properties: Vec<String>,
}

impl WorkspaceConfig {
    /// # Errors
    /// Returns error if the artifact coordinate does not parse or the
    /// derived paths violate the containment invariant.
    pub fn for_host(host_root: &Path, config: &Config) -> Result<Self> {
        let target_artifact: ArtifactCoordinate = config
            .codegen_plugins_artifact
            .parse()
            .context("Invalid codegenPluginsArtifact in config")?;

        let source_module_dir = match config.source_module.as_deref() {
            Some(module) if module != "." => host_root.join(module),
            _ => host_root.to_path_buf(),
        };

        let task_names = if config.task_names.is_empty() {
            vec!["build".to_string()]
        } else {
            config.task_names.clone()
        };

        let workspace_config = Self {
            workspace_dir: host_root.join(HOST_BUILD_DIR).join(WORKSPACE_DIR_NAME),
            source_module_dir,
            target_artifact,
            extra_dependencies: config.proto_dependencies.clone(),
            task_names,
            max_duration: Duration::from_secs(config.max_duration_minutes * 60),
            forwarded_properties: config.forwarded_properties.clone(),
        };
        workspace_config.validate(host_root)?;
        Ok(workspace_config)
    }

    fn validate(&self, host_root: &Path) -> Result<()> {
        if !self.workspace_dir.starts_with(host_root.join(HOST_BUILD_DIR)) {
            bail!(
                "Workspace directory must live under the host build output area - {}",
                self.workspace_dir.display()
            );
        }
        Ok(())
    }
}
