use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_host_project(path: &Path) {
    fs::write(path.join("settings.gradle.kts"), "rootProject.name = \"host\"\n").unwrap();
    fs::write(path.join("build.gradle.kts"), "plugins { java }\n").unwrap();
}

async fn run_cli(path: &Path, args: &[&str]) -> anyhow::Result<()> {
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(path).unwrap();

    let mut full_args = vec!["protobridge".to_string()];
    full_args.extend(args.iter().map(std::string::ToString::to_string));
    let result = protobridge_cli::main(&full_args).await;

    std::env::set_current_dir(&original_dir).unwrap();
    result
}

#[tokio::test]
#[serial]
async fn test_cli_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    let result = run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await;

    assert!(result.is_ok());
    let config = fs::read_to_string(temp_dir.path().join(".protobridge/config.json")).unwrap();
    assert!(config.contains("org.example:codegen-plugins:2.1.0"));
}

#[tokio::test]
#[serial]
async fn test_cli_init_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    let result = run_cli(
        temp_dir.path(),
        &[
            "init",
            "--artifact",
            "org.example:codegen-plugins:2.1.0",
            "--dry-run",
        ],
    )
    .await;

    assert!(result.is_ok());
    assert!(!temp_dir.path().join(".protobridge/config.json").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_init_twice_requires_force() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await
    .unwrap();

    let again = run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.2.0"],
    )
    .await;
    assert!(again.is_err());

    let forced = run_cli(
        temp_dir.path(),
        &[
            "init",
            "--artifact",
            "org.example:codegen-plugins:2.2.0",
            "--force",
        ],
    )
    .await;
    assert!(forced.is_ok());
    let config = fs::read_to_string(temp_dir.path().join(".protobridge/config.json")).unwrap();
    assert!(config.contains("2.2.0"));
}

#[tokio::test]
#[serial]
async fn test_cli_init_rejects_invalid_coordinate() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    let result = run_cli(temp_dir.path(), &["init", "--artifact", "not-a-coordinate"]).await;
    assert!(result.is_err());
    assert!(!temp_dir.path().join(".protobridge/config.json").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_provision_bundled_creates_workspace() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await
    .unwrap();

    let result = run_cli(temp_dir.path(), &["provision", "--mode", "bundled"]).await;
    assert!(result.is_ok());

    let workspace = temp_dir.path().join("build/codegen-workspace");
    assert!(workspace.join("build.gradle.kts").is_file());
    assert!(workspace.join("settings.gradle.kts").is_file());
    assert!(workspace.join("gradlew").is_file());
    assert!(workspace.join("gradlew.bat").is_file());
}

#[tokio::test]
#[serial]
async fn test_cli_generate_without_init_fails() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    let result = run_cli(temp_dir.path(), &["generate"]).await;
    assert!(result.is_err());
}

#[tokio::test]
#[serial]
async fn test_cli_clean_removes_workspace() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await
    .unwrap();
    run_cli(temp_dir.path(), &["provision", "--mode", "bundled"])
        .await
        .unwrap();
    assert!(temp_dir.path().join("build/codegen-workspace").exists());

    let result = run_cli(temp_dir.path(), &["clean", "--yes"]).await;
    assert!(result.is_ok());
    assert!(!temp_dir.path().join("build/codegen-workspace").exists());
}

#[tokio::test]
#[serial]
async fn test_cli_clean_works_with_broken_artifact_coordinate() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    let protobridge_dir = temp_dir.path().join(".protobridge");
    fs::create_dir_all(&protobridge_dir).unwrap();
    fs::write(
        protobridge_dir.join("config.json"),
        r#"{"codegenPluginsArtifact": "not-a-coordinate"}"#,
    )
    .unwrap();
    let workspace = temp_dir.path().join("build/codegen-workspace");
    fs::create_dir_all(&workspace).unwrap();
    fs::write(workspace.join("build.gradle.kts"), "plugins { java }\n").unwrap();

    let result = run_cli(temp_dir.path(), &["clean", "--yes"]).await;
    assert!(result.is_ok());
    assert!(!workspace.exists());
}

#[tokio::test]
#[serial]
async fn test_cli_clean_with_no_workspace() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await
    .unwrap();

    let result = run_cli(temp_dir.path(), &["clean", "--yes"]).await;
    assert!(result.is_ok());
}

#[tokio::test]
#[serial]
async fn test_cli_config_prints_configuration() {
    let temp_dir = TempDir::new().unwrap();
    init_host_project(temp_dir.path());

    run_cli(
        temp_dir.path(),
        &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
    )
    .await
    .unwrap();

    let result = run_cli(temp_dir.path(), &["config"]).await;
    assert!(result.is_ok());
}

#[cfg(unix)]
mod delegated_build {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::fs::File;
    use std::path::PathBuf;

    /// Stands in for the nested Gradle build: records its argument vector
    /// and emits one Kotlin file per main proto schema.
    const FAKE_LAUNCHER: &str = r#"#!/bin/sh
printf '%s\n' "$@" > _args.txt
mkdir -p generated/main/kotlin
for f in src/main/proto/*.proto; do
  [ -e "$f" ] || continue
  base=$(basename "$f" .proto)
  printf 'class %sMessage\n' "$base" > "generated/main/kotlin/${base}.kt"
done
exit 0
"#;

    fn write_bundle(bundle: &Path, files: &[(&str, &[u8])]) {
        fs::create_dir_all(bundle.parent().unwrap()).unwrap();
        let file = File::create(bundle).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (path, bytes) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(bytes.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, path, *bytes).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
    }

    fn repository_bundle_path(host: &Path) -> PathBuf {
        host.join(".protobridge/repository/org/example/codegen-plugins/2.1.0/codegen-plugins-2.1.0.tar.gz")
    }

    #[tokio::test]
    #[serial]
    async fn test_cli_generate_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        init_host_project(temp_dir.path());

        let proto_dir = temp_dir.path().join("src/main/proto");
        fs::create_dir_all(&proto_dir).unwrap();
        fs::write(proto_dir.join("command.proto"), "message Command {}\n").unwrap();

        write_bundle(
            &repository_bundle_path(temp_dir.path()),
            &[
                ("codegen-workspace/gradlew", FAKE_LAUNCHER.as_bytes()),
                (
                    "codegen-workspace/build.gradle.kts",
                    b"plugins { java }\n".as_slice(),
                ),
            ],
        );

        run_cli(
            temp_dir.path(),
            &[
                "init",
                "--artifact",
                "org.example:codegen-plugins:2.1.0",
                "--proto-dependency",
                "org.example:extra-lib:1.0.0",
            ],
        )
        .await
        .unwrap();

        let result = run_cli(temp_dir.path(), &["generate"]).await;
        assert!(result.is_ok(), "generate failed: {:?}", result);

        // The schema round-tripped into the workspace input verbatim
        let workspace = temp_dir.path().join("build/codegen-workspace");
        assert_eq!(
            fs::read_to_string(workspace.join("src/main/proto/command.proto")).unwrap(),
            "message Command {}\n"
        );

        // The nested build saw the fixed flags and the joined dependency items
        let args = fs::read_to_string(workspace.join("_args.txt")).unwrap();
        assert!(args.contains("build"));
        assert!(args.contains("--no-daemon"));
        assert!(args.contains("-PdependencyItems=org.example:extra-lib:1.0.0"));

        // The generated definition file was copied back to the host
        let generated = temp_dir.path().join("generated/main/kotlin/command.kt");
        assert_eq!(
            fs::read_to_string(generated).unwrap(),
            "class commandMessage\n"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_cli_generate_rerun_preserves_existing_outputs() {
        let temp_dir = TempDir::new().unwrap();
        init_host_project(temp_dir.path());

        let proto_dir = temp_dir.path().join("src/main/proto");
        fs::create_dir_all(&proto_dir).unwrap();
        fs::write(proto_dir.join("command.proto"), "message Command {}\n").unwrap();

        write_bundle(
            &repository_bundle_path(temp_dir.path()),
            &[("codegen-workspace/gradlew", FAKE_LAUNCHER.as_bytes())],
        );

        run_cli(
            temp_dir.path(),
            &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
        )
        .await
        .unwrap();
        run_cli(temp_dir.path(), &["generate"]).await.unwrap();

        // Simulate a hand-edited output; a rerun must not clobber it
        let generated = temp_dir.path().join("generated/main/kotlin/command.kt");
        fs::write(&generated, "class commandMessage (edited)\n").unwrap();

        run_cli(temp_dir.path(), &["generate"]).await.unwrap();
        assert_eq!(
            fs::read_to_string(&generated).unwrap(),
            "class commandMessage (edited)\n"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_cli_generate_fails_when_artifact_unresolvable() {
        let temp_dir = TempDir::new().unwrap();
        init_host_project(temp_dir.path());

        run_cli(
            temp_dir.path(),
            &["init", "--artifact", "org.example:codegen-plugins:2.1.0"],
        )
        .await
        .unwrap();

        let result = run_cli(temp_dir.path(), &["generate"]).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("codegen plugins bundle")
        );
    }
}
