pub mod args;
pub mod commands;
pub mod context;
pub mod presentation;
pub mod ui;

pub use args::Cli;
pub use commands::run;
