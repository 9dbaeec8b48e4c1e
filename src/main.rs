//! # Library Reservations Demo
//!
//! Seeds a small catalog, lets four members race for the same book, leaves a
//! second reservation untouched so it expires, and logs the final state.

use library_reservations::clients::LibraryManager;
use library_reservations::lifecycle::{
    setup_tracing, simulate_concurrent_reservations, LibraryConfig, LibrarySystem,
};
use library_reservations::model::{BookCreate, BookId, MemberCreate, MemberId};
use std::time::Duration;
use tracing::{info, warn, Instrument};

const BORROW_DELAY: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = LibraryConfig::from_env();
    info!(?config, "Starting library reservation demo");
    let system = LibrarySystem::new(config.clone());
    let library = &system.client;

    library.add_book(BookCreate::new(1, "The Go Programming Language", "Donovan")).await;
    library.add_book(BookCreate::new(2, "Programming Rust", "Blandy")).await;
    library.add_book(BookCreate::new(10, "Dune", "Frank Herbert")).await;
    library.register_member(MemberCreate::new(101, "Alice")).await;

    // A reservation nobody converts: it should be back on the shelf after the window.
    match library.reserve_book(BookId(2), MemberId(101)).await {
        Ok(()) => info!(ttl_ms = config.reservation_ttl.as_millis() as u64, "Reserved book_2 for Alice; it will auto-cancel"),
        Err(e) => warn!(error = %e, "Reservation failed"),
    }

    let report = simulate_concurrent_reservations(library, BookId(10), BORROW_DELAY)
        .instrument(tracing::info_span!("simulation"))
        .await;

    for outcome in &report.outcomes {
        match (&outcome.reservation, &outcome.borrow) {
            (Ok(()), Some(Ok(()))) => info!(member_id = %outcome.member_id, "Reserved, then borrowed"),
            (Ok(()), Some(Err(e))) => warn!(member_id = %outcome.member_id, error = %e, "Reserved, borrow failed"),
            (Ok(()), None) => info!(member_id = %outcome.member_id, "Reserved"),
            (Err(e), _) => warn!(member_id = %outcome.member_id, error = %e, "Reservation failed"),
        }
    }

    info!("Waiting for the reservation window to pass...");
    tokio::time::sleep(config.reservation_ttl + Duration::from_millis(500)).await;

    let available: Vec<String> = library
        .list_available_books()
        .await
        .iter()
        .map(|book| format!("{} - {} by {}", book.id, book.title, book.author))
        .collect();
    info!(?available, "Available books");

    for member_id in [MemberId(101), MemberId(201)] {
        let borrowed: Vec<BookId> = library
            .list_borrowed_books(member_id)
            .await
            .iter()
            .map(|book| book.id)
            .collect();
        info!(%member_id, ?borrowed, "Borrowed books");
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
