use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::find_host_root;

/// Resolve the `.protobridge` tool directory for the host project containing
/// `current_dir`.
pub fn get_protobridge_dir(current_dir: &Path) -> Result<PathBuf> {
    let host_root = find_host_root(current_dir)?;
    Ok(host_root.join(".protobridge"))
}
