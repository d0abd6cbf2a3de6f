pub mod archive;
pub mod lister;
pub mod permissions;
pub mod provision;
pub mod resolver;
pub mod template;

pub use archive::ArchiveResourceLister;
pub use lister::ResourceLister;
pub use permissions::make_launcher_executable;
pub use provision::{BUNDLE_PREFIX, provision};
pub use resolver::{ArtifactResolver, LocalRepositoryResolver};
pub use template::EmbeddedResourceLister;
