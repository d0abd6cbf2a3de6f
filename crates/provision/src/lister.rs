use protobridge_core::ProvisionError;

/// Read-only view of the files carried by a workspace bundle.
///
/// Backed either by an unpacked archive index or by resources compiled into
/// the binary; either way `list` is recursive, returns entry paths relative
/// to the bundle root, and never includes directory entries.
pub trait ResourceLister {
    fn list(&self, prefix: &str) -> Vec<String>;

    /// # Errors
    /// Returns error if `path` names no entry in the bundle.
    fn open(&self, path: &str) -> Result<Vec<u8>, ProvisionError>;
}
