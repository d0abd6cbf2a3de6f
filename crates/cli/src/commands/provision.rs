use anyhow::Result;
use clap::Args;
use colored::Colorize;
use protobridge_provision::{make_launcher_executable, provision};

use crate::CommandContext;
use crate::bundles::bundle_lister;
use crate::options::ProvisionMode;

#[derive(Args, Debug)]
#[command(about = "Provision the nested codegen workspace")]
pub struct ProvisionArgs {
    /// Where the workspace template comes from
    #[arg(long, value_enum, default_value = "artifact")]
    pub mode: ProvisionMode,
}

/// Provision the nested codegen workspace
pub async fn handle_provision(args: &ProvisionArgs) -> Result<()> {
    let context = CommandContext::new().await?;
    provision_workspace(&context, &args.mode).await?;
    Ok(())
}

/// Shared provisioning step: unpack the workspace and fix the launcher
/// permission bit. Used by both the provision and generate commands.
pub async fn provision_workspace(
    context: &CommandContext,
    mode: &ProvisionMode,
) -> Result<protobridge_core::ProvisionedWorkspace> {
    let workspace_config = context.workspace_config()?;
    let lister = bundle_lister(context, &workspace_config, mode).await?;

    println!(
        "Provisioning workspace in {}",
        workspace_config.workspace_dir.display()
    );
    let workspace = provision(&workspace_config, lister.as_ref()).await?;
    make_launcher_executable(&workspace)?;

    println!("{}", "Workspace provisioned".green());
    Ok(workspace)
}
