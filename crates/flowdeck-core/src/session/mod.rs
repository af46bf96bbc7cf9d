//! Per-session application state.
//!
//! The original dashboard kept persona, view, metrics, and simulation
//! state in hidden globals; here they live in one explicit context owned
//! by the top-level controller and passed by reference into everything
//! that reads or mutates them.

pub mod types;

pub use types::{Persona, SessionContext, View};
