//! Command-line interface module.

mod args;
pub mod input;
mod run;

pub use args::{Cli, Commands, InputArgs, OutputArgs};
pub use run::run;
