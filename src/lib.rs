//! storyplan - Plan short video productions phase by phase.
//!
//! A project moves through six production phases: planning, script,
//! storyboard, assets, editing and export. Each phase keeps its own data,
//! and the whole project list is saved to a single JSON file after every
//! change.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Data directory layout
//! - [`error`] - Error types and result aliases
//! - [`export`] - Storyboard export
//! - [`project`] - Projects, phases and phase payloads
//! - [`settings`] - Local tool settings
//! - [`store`] - The persistent project store
//! - [`storyboard`] - Frame list editing
//! - [`ui`] - Terminal output
//! - [`workflow`] - Workflow step indicators and planning aids
//!
//! # Example
//!
//! ```
//! use storyplan::project::{Phase, PlanningPatch};
//! use storyplan::store::{MemoryBackend, ProjectStore};
//!
//! let mut store = ProjectStore::open(MemoryBackend::new()).unwrap();
//! store.create_project("Night market", "").unwrap();
//! store
//!     .update_phase_data(PlanningPatch {
//!         theme: Some("Street food after dark".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//! store.update_project_phase(Phase::Script).unwrap();
//!
//! let steps = store.workflow_steps();
//! assert!(steps[0].completed);
//! assert!(steps[1].current);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod project;
pub mod settings;
pub mod store;
pub mod storyboard;
pub mod ui;
pub mod workflow;

pub use error::{Result, StoryplanError};
