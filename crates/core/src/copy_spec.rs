use std::path::PathBuf;

/// What to do when a copied file already exists at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Abort the copy with an error
    Fail,
    /// Replace the destination file
    Overwrite,
    /// Keep the destination file untouched
    SkipExisting,
}

/// One directory-tree copy between the host module and the workspace.
///
/// Used symmetrically: the input copy runs with [`DuplicatePolicy::Overwrite`]
/// after a delete, the output copy with [`DuplicatePolicy::SkipExisting`] so a
/// rerun never clobbers outputs from an earlier, partially successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
}

impl CopySpec {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        destination_dir: impl Into<PathBuf>,
        duplicate_policy: DuplicatePolicy,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            destination_dir: destination_dir.into(),
            duplicate_policy,
        }
    }
}
