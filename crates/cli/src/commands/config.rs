use anyhow::Result;
use clap::Args;
use protobridge_utils::get_protobridge_config;

#[derive(Args, Debug)]
#[command(about = "Show the protobridge configuration")]
pub struct ConfigArgs {}

/// Display protobridge configuration
///
/// # Errors
/// Returns error if reading the configuration fails.
pub async fn handle_config(_args: &ConfigArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = get_protobridge_config(&current_dir).await?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
