mod args;
mod launcher;
mod runner;

pub use args::build_args;
pub use launcher::{ChildProcessSpec, launcher_path};
pub use runner::run;
