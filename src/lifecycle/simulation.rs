//! # Concurrent Reservation Simulation
//!
//! Stress-tests one book: several members try to reserve it at the same time,
//! and the first member in the list borrows it after a short delay if their
//! reservation went through. Used by the demo binary and the integration tests.

use crate::clients::LibraryManager;
use crate::error::LibraryError;
use crate::model::{BookId, MemberCreate, MemberId};
use std::time::Duration;
use tracing::{error, info, Instrument};

/// Members that take part in the simulation.
pub const SIMULATION_MEMBERS: [MemberId; 4] =
    [MemberId(201), MemberId(202), MemberId(203), MemberId(204)];

/// What happened to one member during the simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberOutcome {
    pub member_id: MemberId,
    pub reservation: Result<(), LibraryError>,
    /// Only set for the designated borrower, and only if they got the reservation.
    pub borrow: Option<Result<(), LibraryError>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub book_id: BookId,
    /// One entry per participating member, in [`SIMULATION_MEMBERS`] order.
    pub outcomes: Vec<MemberOutcome>,
}

impl SimulationReport {
    pub fn successful_reservations(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.reservation.is_ok())
            .count()
    }
}

/// Runs the simulation against `book_id` and waits for every member to finish.
///
/// Missing members are registered first. Expiry timers armed along the way are
/// not awaited.
pub async fn simulate_concurrent_reservations<M>(
    library: &M,
    book_id: BookId,
    borrow_delay: Duration,
) -> SimulationReport
where
    M: LibraryManager + Clone + 'static,
{
    for member_id in SIMULATION_MEMBERS {
        library
            .register_member_if_absent(MemberCreate::new(
                member_id.0,
                format!("Member{}", member_id.0),
            ))
            .await;
    }

    let borrower = SIMULATION_MEMBERS[0];
    info!(%book_id, members = SIMULATION_MEMBERS.len(), "Starting concurrent reservation attempts");

    let handles: Vec<_> = SIMULATION_MEMBERS
        .into_iter()
        .map(|member_id| {
            let library = library.clone();
            let span = tracing::info_span!("member", %member_id);
            tokio::spawn(
                async move {
                    let reservation = library.reserve_book(book_id, member_id).await;
                    let borrow = if reservation.is_ok() && member_id == borrower {
                        tokio::time::sleep(borrow_delay).await;
                        Some(library.borrow_book(book_id, member_id).await)
                    } else {
                        None
                    };
                    MemberOutcome {
                        member_id,
                        reservation,
                        borrow,
                    }
                }
                .instrument(span),
            )
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!(error = ?e, "Simulation task failed"),
        }
    }

    let report = SimulationReport { book_id, outcomes };
    info!(
        %book_id,
        reserved = report.successful_reservations(),
        "Simulation complete"
    );
    report
}
