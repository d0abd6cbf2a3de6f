mod mode_options;

pub use mode_options::ProvisionMode;
