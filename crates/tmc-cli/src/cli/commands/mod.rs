//! CLI command handlers. Each command is in its own file.

mod add;
mod ls;
mod remove;
mod save;

pub use add::run_add;
pub use ls::run_ls;
pub use remove::run_remove;
pub use save::run_save;
