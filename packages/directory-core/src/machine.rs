//! Machine trait for pure state transitions.
//!
//! Machines are the decision-making layer of the engine. They:
//! 1. Receive events (facts about what happened)
//! 2. Update internal state
//! 3. Optionally emit a command (intent the engine carries out)
//!
//! # Key Properties
//!
//! - **State is internal**: Each machine owns its state via `&mut self`
//! - **Pure decisions**: No IO, no async, just state transitions and command emission
//! - **One event -> one command**: Returns `Option<Command>`, not `Vec<Command>`
//!
//! # Example
//!
//! ```
//! use directory_core::Machine;
//!
//! #[derive(Default)]
//! struct Counter {
//!     seen: usize,
//! }
//!
//! impl Machine for Counter {
//!     type Event = ();
//!     type Command = usize;
//!
//!     fn decide(&mut self, _event: &()) -> Option<usize> {
//!         self.seen += 1;
//!         (self.seen % 2 == 0).then_some(self.seen)
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! assert_eq!(counter.decide(&()), None);
//! assert_eq!(counter.decide(&()), Some(2));
//! ```

/// A state machine that interprets events and decides on commands.
pub trait Machine {
    /// The event type this machine handles.
    type Event;

    /// The command type this machine can emit.
    type Command;

    /// Process an event and optionally return a command.
    ///
    /// # Guarantees
    ///
    /// - Called synchronously (no async)
    /// - Called serially (no concurrent calls)
    /// - At most one command per event
    fn decide(&mut self, event: &Self::Event) -> Option<Self::Command>;
}
