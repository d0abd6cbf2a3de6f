use anyhow::Result;
use clap::Args;
use protobridge_core::Config;
use protobridge_utils::get_protobridge_dir;
use tokio::fs::{create_dir_all, write};

#[derive(Args, Debug)]
#[command(about = "Initialize a protobridge project")]
pub struct InitArgs {
    /// Coordinate of the codegen plugins bundle (group:name:version)
    #[arg(short, long)]
    artifact: String,

    /// Extra proto dependency coordinates; repeating the flag replaces
    /// nothing, but re-running init rewrites the whole list
    #[arg(long = "proto-dependency")]
    proto_dependencies: Vec<String>,

    /// Overwrite an existing configuration
    #[arg(short, long, default_value = "false")]
    force: bool,

    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

/// Initialize a protobridge project
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let protobridge_dir = get_protobridge_dir(&current_dir)?;

    let config_file = protobridge_dir.join("config.json");
    if config_file.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "protobridge project already initialized (use --force to overwrite)"
        ));
    }

    // Validate the coordinate before writing anything
    let config = Config {
        codegen_plugins_artifact: args.artifact.clone(),
        proto_dependencies: args.proto_dependencies.clone(),
        ..Default::default()
    };
    config
        .codegen_plugins_artifact
        .parse::<protobridge_core::ArtifactCoordinate>()?;

    if !args.dry_run {
        create_dir_all(&protobridge_dir).await?;
        write(&config_file, serde_json::to_string_pretty(&config)?).await?;
    }

    println!(
        "protobridge project initialized in {}",
        protobridge_dir.display()
    );

    Ok(())
}
