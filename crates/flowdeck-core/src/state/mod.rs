//! Command dispatch layer.
//!
//! Every state change in the application flows through [`Store::dispatch`]
//! as a [`Command`] and comes back out as a list of [`Event`]s describing
//! what changed. Interfaces never mutate the session directly.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::CoreStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
