pub mod macro_utils;
pub mod tree;
pub mod tree_error;
pub mod utils;
