//! Rollup handlers - cached module and user progress queries.

mod get_module_progress;
mod get_user_progress;

pub use get_module_progress::{GetModuleProgressHandler, GetModuleProgressQuery};
pub use get_user_progress::{GetUserProgressHandler, GetUserProgressQuery};
