//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the library.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`LibraryConfig`], defaults plus environment overrides
//! 2. **Wiring** - [`LibrarySystem`] builds one store and hands it to the client and to the workers, which own the expiry supervisor
//! 3. **Graceful Shutdown** - dropping the client closes the queue, then the workers are awaited
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! [`simulate_concurrent_reservations`] drives the whole system from several
//! members at once and is what the demo binary runs.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - the last queue sender goes away
//! 2. **Workers drain** - buffered requests are still answered
//! 3. **Workers exit** - `dequeue` returns `None`
//! 4. **Await completion** - a panicked worker is reported as an error
//!
//! Armed expiry timers are not part of shutdown; they only hold the store.

pub mod config;
pub mod library_system;
pub mod simulation;
pub mod tracing;

pub use config::*;
pub use library_system::*;
pub use simulation::*;
pub use self::tracing::*;
