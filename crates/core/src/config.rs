use serde::{Deserialize, Serialize};

/// Loaded from `.protobridge/config.json`, controls the codegen plugins
/// coordinate, extra proto dependencies, nested task list, and property
/// forwarding.
///
/// `protoDependencies` holds the final list: writing the config replaces any
/// previous list rather than appending to it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Coordinate of the codegen plugins bundle (e.g., "org.example:codegen-plugins:2.1.0")
    pub codegen_plugins_artifact: String,

    /// Extra dependency coordinates made visible to the nested build
    #[serde(default)]
    pub proto_dependencies: Vec<String>,

    /// Tasks to run in the nested build (default: a single "build")
    #[serde(default = "default_task_names")]
    pub task_names: Vec<String>,

    /// Maximum time the nested build may run before it is killed
    #[serde(default = "default_max_duration_minutes")]
    pub max_duration_minutes: u64,

    /// Host build property names forwarded into the nested build when present
    #[serde(default)]
    pub forwarded_properties: Vec<String>,

    /// Local artifact repository root used to resolve the workspace bundle
    #[serde(default)]
    pub artifact_repository: Option<String>,

    /// Relative path of the host module holding the proto sources (default: ".")
    #[serde(default)]
    pub source_module: Option<String>,
}

fn default_task_names() -> Vec<String> {
    vec!["build".to_string()]
}

fn default_max_duration_minutes() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codegen_plugins_artifact: String::new(),
            proto_dependencies: Vec::new(),
            task_names: default_task_names(),
            max_duration_minutes: default_max_duration_minutes(),
            forwarded_properties: Vec::new(),
            artifact_repository: None,
            source_module: None,
        }
    }
}
