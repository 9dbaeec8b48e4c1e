//! # Mock Queue
//!
//! Utilities for testing code that sits in front of the reservation queue
//! (most importantly [`LibraryClient::reserve_book`](crate::clients::LibraryClient::reserve_book))
//! without spawning a worker pool.
//!
//! Use [`create_mock_queue`] to get a sender and the raw receiver, then
//! [`expect_reservation`] to pull the next request and answer it by hand.
//!
//! ```rust,ignore
//! let (sender, mut receiver) = create_mock_queue(10);
//! let client = LibraryClient::new(sender, store.clone());
//!
//! let task = tokio::spawn(async move { client.reserve_book(BookId(1), MemberId(7)).await });
//! let (book_id, member_id, responder) = expect_reservation(&mut receiver).await.unwrap();
//! responder.send(Err(LibraryError::AlreadyReserved(book_id))).unwrap();
//! assert!(task.await.unwrap().is_err());
//! ```

use crate::framework::message::{ReservationRequest, Response};
use crate::framework::queue::ReservationSender;
use crate::model::{BookId, MemberId};
use tokio::sync::mpsc;

/// Creates a sender backed by a plain receiver the test drives itself.
pub fn create_mock_queue(
    buffer_size: usize,
) -> (ReservationSender, mpsc::Receiver<ReservationRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (ReservationSender::new(sender), receiver)
}

/// Helper to take the next reservation request off a mock queue.
///
/// Returns `None` if the queue closed.
pub async fn expect_reservation(
    receiver: &mut mpsc::Receiver<ReservationRequest>,
) -> Option<(BookId, MemberId, Response<()>)> {
    receiver.recv().await.map(|request| {
        let ReservationRequest {
            book_id,
            member_id,
            respond_to,
        } = request;
        (book_id, member_id, respond_to)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;

    #[tokio::test]
    async fn test_expect_reservation_round_trip() {
        let (sender, mut receiver) = create_mock_queue(4);
        let (request, reply) = ReservationRequest::new(BookId(3), MemberId(30));
        sender.enqueue(request).await.unwrap();

        let (book_id, member_id, responder) = expect_reservation(&mut receiver)
            .await
            .expect("Expected reservation request");
        assert_eq!(book_id, BookId(3));
        assert_eq!(member_id, MemberId(30));

        responder.send(Err(LibraryError::AlreadyReserved(book_id))).unwrap();
        assert_eq!(reply.await.unwrap(), Err(LibraryError::AlreadyReserved(BookId(3))));
    }

    #[tokio::test]
    async fn test_expect_reservation_on_closed_queue() {
        let (sender, mut receiver) = create_mock_queue(4);
        drop(sender);
        assert!(expect_reservation(&mut receiver).await.is_none());
    }
}
