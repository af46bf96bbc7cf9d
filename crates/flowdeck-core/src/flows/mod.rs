//! Static catalog of deployment flow definitions.
//!
//! A flow is a named, ordered sequence of deployment steps. The catalog
//! is built once, read-only, and shared by everything that renders or
//! simulates flows. Step statuses here are design-time illustrations;
//! the live simulation state lives in [`crate::simulation`].

pub mod catalog;
pub mod errors;
pub mod types;

pub use catalog::FlowCatalog;
pub use errors::FlowError;
pub use types::{FlowDefinition, FlowStats, StepDefinition, StepStatus};
