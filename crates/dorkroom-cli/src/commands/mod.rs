//! Command implementations for the dorkroom CLI.

mod border;
mod exposure;
mod lens;
mod recipe;

// Re-export all command functions
pub use border::cmd_border;
pub use exposure::{cmd_ev, cmd_resize, cmd_stops};
pub use lens::cmd_lens;
pub use recipe::{cmd_recipe_create, cmd_recipe_list, cmd_recipe_show};
