use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protobridge_relay::{copy_in, copy_out};
use protobridge_runner::run;

use crate::CommandContext;
use crate::commands::provision::provision_workspace;
use crate::options::ProvisionMode;

#[derive(Args, Debug)]
#[command(about = "Run code generation through the nested workspace")]
pub struct GenerateArgs {
    /// Where the workspace template comes from
    #[arg(long, value_enum, default_value = "artifact")]
    pub mode: ProvisionMode,

    /// Also clean the nested build before generating
    #[arg(long, default_value = "false")]
    pub clean: bool,
}

/// Run code generation through the nested workspace
pub async fn handle_generate(args: &GenerateArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    let workspace_config = context.workspace_config()?;

    // provision -> permission fix -> copy-in -> delegated build -> copy-out
    let workspace = provision_workspace(&context, &args.mode).await?;

    println!(
        "Copying proto sources from {}",
        workspace_config.source_module_dir.display()
    );
    copy_in(&workspace_config.source_module_dir, &workspace).await?;

    let host = context.host_context(args.clean).await?;
    println!(
        "Running delegated build (tasks: {})",
        workspace_config.task_names.join(", ")
    );
    let result = run(&workspace_config, &workspace, &host).await?;

    let copied = copy_out(&workspace, &workspace_config.source_module_dir).await?;
    println!(
        "{} (exit code {}, {} new generated files, debug log: {})",
        "Generation succeeded".green(),
        result.exit_code.unwrap_or_default(),
        copied,
        result.debug_log.display()
    );
    Ok(())
}
