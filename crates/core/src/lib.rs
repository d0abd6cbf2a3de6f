pub mod config;
pub mod coordinate;
pub mod copy_spec;
pub mod error;
pub mod execution;
pub mod host_context;
pub mod source_set;
pub mod workspace;
pub mod workspace_config;

// Re-export the main types for convenience
pub use config::Config;
pub use coordinate::{ArtifactCoordinate, InvalidCoordinate};
pub use copy_spec::{CopySpec, DuplicatePolicy};
pub use error::{DelegatedBuildError, ProvisionError, RelayError};
pub use execution::ExecutionResult;
pub use host_context::{HostContext, PropertiesHostContext};
pub use source_set::SourceSet;
pub use workspace::ProvisionedWorkspace;
pub use workspace_config::WorkspaceConfig;
