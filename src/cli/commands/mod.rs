//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and works on the project
//! store found under the resolved data directory. Commands open the store,
//! make at most one kind of change, and let the store persist it.

pub mod completions;
pub mod delete;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod frame;
pub mod list;
pub mod new;
pub mod phase;
pub mod plan;
pub mod select;
pub mod settings;
pub mod show;
pub mod steps;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
