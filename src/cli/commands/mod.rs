//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and loads the option catalog
//! once for the commands that need it.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod new;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
