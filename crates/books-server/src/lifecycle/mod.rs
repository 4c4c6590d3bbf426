//! # System Lifecycle
//!
//! Starting, seeding and stopping the store, and the process-wide tracing setup.
//!
//! ## Start-up
//!
//! [`BookSystem::start`] spawns the Book actor and then seeds it through the
//! same create path the HTTP handlers use, so the seeds get ids `1` and `2`
//! and the counter continues from `3`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - the HTTP server drains and drops its router, and
//!    with it the router's client clone
//! 2. **Drop the last client** - [`BookSystem::shutdown`] drops its own client,
//!    closing the channel
//! 3. **Actor exits** - `receiver.recv()` returns `None`, the final store size is logged
//! 4. **Await completion** - the actor task is joined
//!
//! ## Observability
//!
//! See the [`tracing`] module for the subscriber setup and log levels.

pub mod book_system;
pub mod tracing;

pub use self::book_system::*;
pub use self::tracing::*;
