//! CLI command handlers.

mod context;
mod grab;
mod history;
mod list;
mod open;
mod render;
mod settings;
mod transitions;

pub use context::{AppContext, open_context};
pub use grab::run_grab_command;
pub use history::run_history_command;
pub use list::run_list_command;
pub use open::run_open_command;
pub use settings::{run_settings_set_command, run_settings_show_command};
pub use transitions::{run_complete_command, run_transition_command};
