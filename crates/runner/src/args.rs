use protobridge_core::{HostContext, WorkspaceConfig};
use protobridge_utils::join_dependency_items;

/// Build the nested build's argument vector.
///
/// Order matters to Gradle: tasks first, then flags, then `-P` properties.
/// A `clean` task is prepended only when the host build itself was asked to
/// clean, propagating host intent into the nested build. The daemon is
/// disabled because the workspace is ephemeral per host invocation and must
/// not leave a resident process behind.
pub fn build_args(config: &WorkspaceConfig, host: &dyn HostContext) -> Vec<String> {
    let mut args = Vec::new();

    if host.has_task_named("clean") {
        args.push("clean".to_string());
    }
    args.extend(config.task_names.iter().cloned());

    args.push("--console=plain".to_string());
    args.push("--stacktrace".to_string());
    args.push("--no-daemon".to_string());

    // Whitelisted host properties; a name missing on the host is silently
    // omitted, not an error.
    for name in &config.forwarded_properties {
        if let Some(value) = host.property(name) {
            args.push(format!("-P{name}={value}"));
        }
    }

    args.push(format!(
        "-PsourceModuleDir={}",
        config.source_module_dir.display()
    ));
    args.push(format!(
        "-PcodegenPluginsArtifact={}",
        config.target_artifact
    ));
    args.push(format!(
        "-PcodegenPluginsVersion={}",
        config.target_artifact.version
    ));
    if let Some(items) = join_dependency_items(&config.extra_dependencies) {
        args.push(format!("-PdependencyItems={items}"));
    }

    args
}
