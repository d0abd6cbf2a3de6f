use protobridge_core::{CopySpec, DuplicatePolicy, RelayError};
use tokio::fs::{copy, create_dir_all};
use walkdir::WalkDir;

/// Recursively copy a directory tree, preserving relative paths and applying
/// the spec's duplicate policy per file.
///
/// Returns the number of files written. There is no rollback on partial
/// failure; the input relay self-heals on the next delete-then-copy pass.
pub async fn copy_tree(spec: &CopySpec) -> Result<u64, RelayError> {
    let mut copied = 0;
    for entry in WalkDir::new(&spec.source_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(&spec.source_dir)
            .map_err(|_| std::io::Error::other("walked entry outside source tree"))?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let target = spec.destination_dir.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&target).await?;
            continue;
        }
        if target.exists() {
            match spec.duplicate_policy {
                DuplicatePolicy::Fail => {
                    return Err(RelayError::DuplicateEntry { path: target });
                }
                DuplicatePolicy::SkipExisting => continue,
                DuplicatePolicy::Overwrite => {}
            }
        }
        if let Some(parent) = target.parent() {
            create_dir_all(parent).await?;
        }
        copy(entry.path(), &target).await?;
        copied += 1;
    }
    Ok(copied)
}
