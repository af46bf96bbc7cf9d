use super::events::Event;
use super::types::Command;

/// Trait for dispatching business commands.
///
/// Decouples command definitions from their execution. Interfaces
/// implement this trait to execute commands with their specific needs
/// (a TUI would add event emission, the CLI runs synchronously).
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit
///   batching.
/// - **Idempotency**: Most commands are idempotent (`PauseSimulation`
///   twice equals once); `Tick` is not, it advances the cursor each time
///   the simulation is running.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>`
///   describing what changed. A `Tick` that lands on the final step emits
///   two events, advance then completion, in chronological order.
///   Callers can use these to react without polling.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
