//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by
//! `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Workers**: start, stop, every accepted or rejected reservation (`worker_id`, `book_id`, `member_id`)
//! - **Expiry**: revocations at `info`, no-op firings at `debug`
//! - **Lending**: borrow and return outcomes, failures at `warn`
//! - **Client calls**: one span per call via `#[instrument]`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Reservations, expiries and lending
//! RUST_LOG=info cargo run
//!
//! # Also show queued requests and no-op expiry timers
//! RUST_LOG=debug cargo run
//!
//! # Only the workers
//! RUST_LOG=library_reservations::reservation=debug cargo run
//! ```
//!
//! A concurrent reservation run at `info` looks like:
//!
//! ```text
//! INFO Reservation worker started worker_id=1
//! INFO Reserved worker_id=2 book_id=book_10 member_id=member_201
//! WARN Reservation rejected worker_id=1 book_id=book_10 member_id=member_202 error=Book already reserved: book_10
//! INFO simulation:borrow_book: Borrowed book_id=book_10 member_id=member_201
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
