use std::path::PathBuf;

use async_trait::async_trait;
use protobridge_core::{ArtifactCoordinate, ProvisionError};

/// Resolves a coordinate to exactly one locally retrievable bundle.
///
/// Resolution is non-transitive on purpose: only the named artifact is
/// fetched, never its dependency closure, so the nested build's classpath
/// stays uncontaminated by the host's dependencies.
#[async_trait]
pub trait ArtifactResolver: Send + Sync {
    async fn resolve(&self, coordinate: &ArtifactCoordinate) -> Result<PathBuf, ProvisionError>;
}

/// [`ArtifactResolver`] over a maven-style local repository layout:
/// `<root>/<group-as-dirs>/<name>/<version>/<name>-<version>.tar.gz`.
#[derive(Debug)]
pub struct LocalRepositoryResolver {
    repository_root: PathBuf,
}

impl LocalRepositoryResolver {
    pub fn new(repository_root: impl Into<PathBuf>) -> Self {
        Self {
            repository_root: repository_root.into(),
        }
    }

    fn bundle_path(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        let mut path = self.repository_root.clone();
        for segment in coordinate.group.split('.') {
            path.push(segment);
        }
        path.push(&coordinate.name);
        path.push(&coordinate.version);
        path.push(format!("{}-{}.tar.gz", coordinate.name, coordinate.version));
        path
    }
}

#[async_trait]
impl ArtifactResolver for LocalRepositoryResolver {
    async fn resolve(&self, coordinate: &ArtifactCoordinate) -> Result<PathBuf, ProvisionError> {
        let bundle = self.bundle_path(coordinate);
        if tokio::fs::try_exists(&bundle).await? {
            Ok(bundle)
        } else {
            Err(ProvisionError::ArtifactUnresolvable {
                coordinate: coordinate.to_string(),
                searched: bundle,
            })
        }
    }
}
