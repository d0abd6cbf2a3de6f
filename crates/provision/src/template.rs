use protobridge_core::ProvisionError;

use crate::ResourceLister;

/// The build-time template manifest for the embedded provisioning mode.
///
/// Archive bundling tools may merge or flatten regular entries, so the
/// wrapper jar travels through the artifact bundle as a renamed asset
/// instead; the embedded template only carries text resources, and its
/// launcher falls back to a `gradle` on PATH when no wrapper jar exists.
const MANIFEST: &[(&str, &[u8])] = &[
    (
        "codegen-workspace/build.gradle.kts",
        include_bytes!("../templates/workspace/build.gradle.kts"),
    ),
    (
        "codegen-workspace/settings.gradle.kts",
        include_bytes!("../templates/workspace/settings.gradle.kts"),
    ),
    (
        "codegen-workspace/gradle.properties",
        include_bytes!("../templates/workspace/gradle.properties"),
    ),
    (
        "codegen-workspace/gradlew",
        include_bytes!("../templates/workspace/gradlew"),
    ),
    (
        "codegen-workspace/gradlew.bat",
        include_bytes!("../templates/workspace/gradlew.bat"),
    ),
    (
        "codegen-workspace/gradle/wrapper/gradle-wrapper.properties",
        include_bytes!("../templates/workspace/gradle/wrapper/gradle-wrapper.properties"),
    ),
];

/// [`ResourceLister`] over the templates compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedResourceLister;

impl EmbeddedResourceLister {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ResourceLister for EmbeddedResourceLister {
    fn list(&self, prefix: &str) -> Vec<String> {
        MANIFEST
            .iter()
            .filter(|(path, _)| path.starts_with(prefix))
            .map(|(path, _)| (*path).to_string())
            .collect()
    }

    fn open(&self, path: &str) -> Result<Vec<u8>, ProvisionError> {
        MANIFEST
            .iter()
            .find(|(entry, _)| *entry == path)
            .map(|(_, bytes)| bytes.to_vec())
            .ok_or_else(|| ProvisionError::MalformedBundle(format!("missing entry {path}")))
    }
}
