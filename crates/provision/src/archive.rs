use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use protobridge_core::ProvisionError;
use tar::Archive;

use crate::ResourceLister;

/// [`ResourceLister`] over a `.tar.gz` workspace bundle.
///
/// The whole bundle is indexed in memory at construction; bundles are a few
/// build scripts plus one wrapper jar, so random access beats re-scanning
/// the stream per entry.
#[derive(Debug)]
pub struct ArchiveResourceLister {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ArchiveResourceLister {
    /// # Errors
    /// Returns error if the bundle cannot be opened or is not a readable
    /// gzipped tar archive.
    pub fn from_path(bundle: &Path) -> Result<Self, ProvisionError> {
        let file = File::open(bundle)?;
        let mut archive = Archive::new(GzDecoder::new(file));
        let mut entries = BTreeMap::new();

        let iterator = archive
            .entries()
            .map_err(|error| ProvisionError::MalformedBundle(error.to_string()))?;
        for entry in iterator {
            let mut entry =
                entry.map_err(|error| ProvisionError::MalformedBundle(error.to_string()))?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            let path = entry
                .path()
                .map_err(|error| ProvisionError::MalformedBundle(error.to_string()))?
                .to_string_lossy()
                .into_owned();
            let mut bytes = Vec::new();
            entry
                .read_to_end(&mut bytes)
                .map_err(|error| ProvisionError::MalformedBundle(error.to_string()))?;
            entries.insert(path, bytes);
        }

        Ok(Self { entries })
    }
}

impl ResourceLister for ArchiveResourceLister {
    fn list(&self, prefix: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|path| path.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn open(&self, path: &str) -> Result<Vec<u8>, ProvisionError> {
        self.entries
            .get(path)
            .cloned()
            .ok_or_else(|| ProvisionError::MalformedBundle(format!("missing entry {path}")))
    }
}
