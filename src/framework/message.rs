//! # Reservation Messages
//!
//! The request type carried by the reservation queue from a
//! [`LibraryClient`](crate::clients::LibraryClient) to a reservation worker.

use crate::error::LibraryError;
use crate::model::{BookId, MemberId};
use tokio::sync::oneshot;

/// Type alias for the one-shot reply slot used by reservation workers.
pub type Response<T> = oneshot::Sender<Result<T, LibraryError>>;

/// A single reservation attempt.
///
/// Consumed by exactly one worker, which answers through `respond_to`
/// exactly once. A one-shot sender cannot be used twice, so the type system
/// enforces the single reply.
#[derive(Debug)]
pub struct ReservationRequest {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub respond_to: Response<()>,
}

impl ReservationRequest {
    /// Builds a request and returns the receiving half of its reply slot.
    pub fn new(
        book_id: BookId,
        member_id: MemberId,
    ) -> (Self, oneshot::Receiver<Result<(), LibraryError>>) {
        let (respond_to, response) = oneshot::channel();
        (
            Self {
                book_id,
                member_id,
                respond_to,
            },
            response,
        )
    }
}
