use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protobridge_core::workspace_config::{HOST_BUILD_DIR, WORKSPACE_DIR_NAME};
use tokio::fs::remove_dir_all;

use crate::CommandContext;
use crate::prompter::confirm;

#[derive(Args, Debug)]
#[command(about = "Remove the nested codegen workspace")]
pub struct CleanArgs {
    /// Skip the confirmation prompt
    #[arg(short, long, default_value = "false")]
    yes: bool,
}

/// Remove the nested codegen workspace
///
/// This is the only supported destruction path for a provisioned workspace;
/// nothing deletes it mid-run.
pub async fn handle_clean(args: &CleanArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    // Derived from the host root alone, not from the full workspace config:
    // a config with a broken artifact coordinate must still be cleanable.
    let workspace_dir = context
        .host_root
        .join(HOST_BUILD_DIR)
        .join(WORKSPACE_DIR_NAME);

    if !workspace_dir.exists() {
        println!("No workspace to clean at {}", workspace_dir.display());
        return Ok(());
    }

    let confirmed = if args.yes {
        true
    } else {
        confirm(&format!(
            "Remove the codegen workspace at {}?",
            workspace_dir.display()
        ))?
    };
    if !confirmed {
        println!("Clean cancelled");
        return Ok(());
    }

    remove_dir_all(&workspace_dir).await?;
    println!(
        "{} {}",
        "Removed".green(),
        workspace_dir.display()
    );
    Ok(())
}
