use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Files/directories whose presence marks a Gradle host project root.
const ROOT_MARKERS: [&str; 5] = [
    ".protobridge",
    "settings.gradle.kts",
    "settings.gradle",
    "build.gradle.kts",
    "build.gradle",
];

/// Find the host project root by walking up from the current directory.
pub fn find_host_root(current_dir: &Path) -> Result<PathBuf> {
    let mut dir = current_dir;
    loop {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => bail!(
                "No Gradle host project found above {} (expected a settings.gradle, build.gradle, or .protobridge marker)",
                current_dir.display()
            ),
        }
    }
}
