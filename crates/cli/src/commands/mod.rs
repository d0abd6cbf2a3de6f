mod clean;
mod config;
mod generate;
mod init;
mod provision;

pub use clean::CleanArgs;
pub use clean::handle_clean;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use generate::GenerateArgs;
pub use generate::handle_generate;
pub use init::InitArgs;
pub use init::handle_init;
pub use provision::ProvisionArgs;
pub use provision::handle_provision;
