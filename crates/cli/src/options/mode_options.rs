use clap::ValueEnum;

/// Where the workspace template comes from.
#[derive(Debug, Clone, ValueEnum)]
pub enum ProvisionMode {
    /// Resolve the bundle through the local artifact repository
    Artifact,
    /// Use the template resources compiled into this binary
    Bundled,
}
