use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use protobridge_core::{Config, PropertiesHostContext, WorkspaceConfig};
use protobridge_utils::{find_host_root, get_protobridge_config, parse_properties};

pub struct CommandContext {
    pub host_root: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// # Errors
    /// Returns error if no host project is found above the current directory
    /// or the protobridge config cannot be loaded.
    pub async fn new() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let host_root = find_host_root(&current_dir)?;
        let config = get_protobridge_config(&current_dir).await?;
        Ok(Self { host_root, config })
    }

    /// # Errors
    /// Returns error if the configured artifact coordinate is invalid.
    pub fn workspace_config(&self) -> Result<WorkspaceConfig> {
        WorkspaceConfig::for_host(&self.host_root, &self.config)
    }

    /// Host context for the runner: the host's `gradle.properties` (when
    /// present) plus the task list this invocation stands in for.
    pub async fn host_context(&self, clean_requested: bool) -> Result<PropertiesHostContext> {
        let properties_file = self.host_root.join("gradle.properties");
        let properties = if properties_file.is_file() {
            parse_properties(&tokio::fs::read_to_string(&properties_file).await?)
        } else {
            HashMap::new()
        };
        let requested_tasks = if clean_requested {
            vec!["clean".to_string()]
        } else {
            Vec::new()
        };
        Ok(PropertiesHostContext::new(properties, requested_tasks))
    }
}
