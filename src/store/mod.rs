//! Persistent project store.
//!
//! - [`ProjectStore`] - the single source of truth for projects
//! - [`StateBackend`] - where the store saves its state after each change
//! - [`PersistedState`] - the saved layout

pub mod backend;
pub mod project_store;
pub mod state;

pub use backend::{FileBackend, MemoryBackend, StateBackend};
pub use project_store::ProjectStore;
pub use state::{PersistedState, StoreState};
