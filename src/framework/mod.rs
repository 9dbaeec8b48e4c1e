//! Reservation plumbing: the request message, the bounded queue, and test helpers.
//!
//! # Main Components
//!
//! - [`ReservationRequest`] - A reservation attempt with its one-shot reply slot
//! - [`ReservationSender`] / [`ReservationQueue`] - Producer and shared consumer halves of the queue
//! - [`mock`] - Drive the queue by hand in tests, without workers

pub mod message;
pub mod mock;
pub mod queue;

// Re-export core types for convenience
pub use message::{ReservationRequest, Response};
pub use queue::{channel, ReservationQueue, ReservationSender, DEFAULT_QUEUE_CAPACITY};
