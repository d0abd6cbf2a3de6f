mod copy_tree;
mod relay;

pub use copy_tree::copy_tree;
pub use relay::{copy_in, copy_out};
