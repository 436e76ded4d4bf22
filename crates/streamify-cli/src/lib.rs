// Streamify: a terminal dashboard over music streaming data.
//
// Data flow is one-way: handlers load a `DashboardContext`, presenters turn
// the context into view models, renderers paint view models to the console
// or the TUI. Only the control state changes over a session; the record
// store is replaced wholesale when it changes at all.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
