mod find_host_root;
mod get_protobridge_config;
mod get_protobridge_dir;
mod join_dependency_items;
mod parse_properties;

pub use find_host_root::find_host_root;
pub use get_protobridge_config::get_protobridge_config;
pub use get_protobridge_dir::get_protobridge_dir;
pub use join_dependency_items::join_dependency_items;
pub use parse_properties::parse_properties;
