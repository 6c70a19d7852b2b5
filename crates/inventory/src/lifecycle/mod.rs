//! # System Lifecycle
//!
//! Starting, wiring, and shutting down the product actor.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Every request sent before shutdown is answered and, if it mutates, saved.

pub mod inventory_system;

pub use inventory_system::*;
