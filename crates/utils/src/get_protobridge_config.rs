use std::path::Path;

use anyhow::{Context, Result};
use protobridge_core::Config;
use tokio::fs::read_to_string;

use crate::get_protobridge_dir;

/// Load `.protobridge/config.json` for the host project containing
/// `current_dir`.
pub async fn get_protobridge_config(current_dir: &Path) -> Result<Config> {
    let config_file = get_protobridge_dir(current_dir)?.join("config.json");
    if !config_file.exists() {
        anyhow::bail!("protobridge project not initialized (run `protobridge init` first)");
    }
    let content = read_to_string(&config_file)
        .await
        .context(format!("Failed to read {}", config_file.display()))?;
    let config: Config = serde_json::from_str(&content)
        .context(format!("Failed to parse {}", config_file.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_config_success() {
        let temp_dir = TempDir::new().unwrap();
        let protobridge_dir = temp_dir.path().join(".protobridge");
        fs::create_dir_all(&protobridge_dir).unwrap();
        fs::write(
            protobridge_dir.join("config.json"),
            r#"{"codegenPluginsArtifact": "org.example:codegen-plugins:2.1.0"}"#,
        )
        .unwrap();

        let config = get_protobridge_config(temp_dir.path()).await.unwrap();
        assert_eq!(
            config.codegen_plugins_artifact,
            "org.example:codegen-plugins:2.1.0"
        );
    }

    #[tokio::test]
    async fn test_get_config_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("build.gradle"), "").unwrap();

        let result = get_protobridge_config(temp_dir.path()).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not initialized")
        );
    }

    #[tokio::test]
    async fn test_get_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let protobridge_dir = temp_dir.path().join(".protobridge");
        fs::create_dir_all(&protobridge_dir).unwrap();
        fs::write(protobridge_dir.join("config.json"), "not json").unwrap();

        assert!(get_protobridge_config(temp_dir.path()).await.is_err());
    }
}
