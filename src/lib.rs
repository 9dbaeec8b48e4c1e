//! # Library Reservations
//!
//! > **Concurrent book reservations with worker-serviced queues and auto-expiry.**
//!
//! A shared catalog of books and a pool of members who borrow, return and
//! reserve them. Reservations travel through a bounded queue to a fixed pool of
//! Tokio workers; each successful reservation is auto-cancelled after a fixed
//! window unless the holder borrows the book first.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Store, One Lock
//! All book and member state lives in a single [`CatalogStore`](catalog::CatalogStore).
//! Workers, expiry timers and lending calls never keep references to records;
//! they re-fetch by id inside one critical section per operation. Whoever takes
//! the lock first wins, and the loser sees the already-updated state.
//!
//! ### Queue Plus Workers
//! Reservation requests carry a one-shot reply slot. The queue gives FIFO
//! removal order and backpressure; the store lock gives atomicity. Neither is
//! relied on for the other's job.
//!
//! ### Timers That Re-check
//! An expiry timer only clears a reservation its member still holds on a book
//! that was not borrowed. A stale timer finds nothing to do, so timers are never
//! cancelled.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Book`](model::Book), [`Member`](model::Member) and their DTOs.
//! - [`catalog`] - The lock-guarded store and its read-check-write steps.
//! - [`framework`] - Reservation request, bounded queue, and [`mock`](framework::mock) helpers for tests.
//! - [`reservation`] - [`WorkerPool`](reservation::WorkerPool) and [`ExpirySupervisor`](reservation::ExpirySupervisor).
//! - [`clients`] - [`LibraryManager`](clients::LibraryManager) and [`LibraryClient`](clients::LibraryClient), the public API.
//! - [`lifecycle`] - Configuration, [`LibrarySystem`](lifecycle::LibrarySystem), tracing setup, and the concurrency simulation.
//! - [`error`] - [`LibraryError`](error::LibraryError).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the concurrent reservation demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Shorter reservation window
//! LIBRARY_RESERVATION_TTL_MS=1000 RUST_LOG=info cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod reservation;
