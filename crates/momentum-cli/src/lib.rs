mod args;
mod commands;
mod tui;

pub use args::Cli;
pub use commands::run;
