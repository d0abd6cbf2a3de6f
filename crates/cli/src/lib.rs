use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    CleanArgs, ConfigArgs, GenerateArgs, InitArgs, ProvisionArgs, handle_clean, handle_config,
    handle_generate, handle_init, handle_provision,
};

pub mod bundles;
pub mod commands;
mod context;
pub mod options;
pub mod prompter;

pub use context::CommandContext;
pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "protobridge",
    author,
    version,
    about = "Runs Protocol-Buffer code generation through a nested, newer-Gradle build workspace",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Provision(ProvisionArgs),
    Generate(GenerateArgs),
    Clean(CleanArgs),
    Config(ConfigArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Init(args) => handle_init(&args).await?,
        Commands::Provision(args) => handle_provision(&args).await?,
        Commands::Generate(args) => handle_generate(&args).await?,
        Commands::Clean(args) => handle_clean(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ProvisionMode;

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from([
            "protobridge",
            "init",
            "--artifact",
            "org.example:codegen-plugins:2.1.0",
        ]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parsing_provision_with_mode() {
        let cli = Cli::parse_from(["protobridge", "provision", "--mode", "bundled"]);
        let Commands::Provision(args) = cli.command else {
            panic!("expected provision command");
        };
        assert!(matches!(args.mode, ProvisionMode::Bundled));
    }

    #[test]
    fn test_cli_parsing_generate_defaults_to_artifact_mode() {
        let cli = Cli::parse_from(["protobridge", "generate"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert!(matches!(args.mode, ProvisionMode::Artifact));
        assert!(!args.clean);
    }

    #[test]
    fn test_cli_parsing_generate_with_clean() {
        let cli = Cli::parse_from(["protobridge", "generate", "--clean"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert!(args.clean);
    }

    #[test]
    fn test_cli_parsing_clean() {
        let cli = Cli::parse_from(["protobridge", "clean", "--yes"]);
        assert!(matches!(cli.command, Commands::Clean(_)));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["protobridge", "config"]);
        assert!(matches!(cli.command, Commands::Config(_)));
    }
}
