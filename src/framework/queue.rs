//! # Reservation Queue
//!
//! A bounded FIFO channel of [`ReservationRequest`]s shared by a pool of
//! consumers.
//!
//! ## Architecture Note
//! `tokio::sync::mpsc` gives us the bounded buffer, backpressure on `send` and
//! FIFO ordering across producers. Its receiver is single-consumer, so the
//! consumer half is wrapped in an `Arc<Mutex<_>>`: a worker holds the mutex
//! only while waiting for the next request, hands it back, then processes the
//! request without it. Each request therefore reaches exactly one worker.
//!
//! The queue closes when every [`ReservationSender`] is dropped. Requests
//! already buffered are still delivered; after that, [`ReservationQueue::dequeue`]
//! returns `None` to every worker.

use crate::error::LibraryError;
use crate::framework::message::ReservationRequest;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Design default for the queue capacity.
pub const DEFAULT_QUEUE_CAPACITY: usize = 50;

/// Creates a bounded reservation queue.
///
/// `capacity` is clamped to at least 1.
pub fn channel(capacity: usize) -> (ReservationSender, ReservationQueue) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        ReservationSender::new(sender),
        ReservationQueue {
            receiver: Arc::new(Mutex::new(receiver)),
        },
    )
}

/// Producer half. Cloneable; the queue stays open while any clone is alive.
#[derive(Debug, Clone)]
pub struct ReservationSender {
    sender: mpsc::Sender<ReservationRequest>,
}

impl ReservationSender {
    pub fn new(sender: mpsc::Sender<ReservationRequest>) -> Self {
        Self { sender }
    }

    /// Enqueues a request, waiting while the queue is full. Never drops.
    pub async fn enqueue(&self, request: ReservationRequest) -> Result<(), LibraryError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| LibraryError::QueueClosed)
    }
}

/// Consumer half, shared by all workers.
#[derive(Debug, Clone)]
pub struct ReservationQueue {
    receiver: Arc<Mutex<mpsc::Receiver<ReservationRequest>>>,
}

impl ReservationQueue {
    /// Waits for the next request. `None` means the queue is closed and drained.
    pub async fn dequeue(&self) -> Option<ReservationRequest> {
        let mut receiver = self.receiver.lock().await;
        receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookId, MemberId};
    use std::time::Duration;

    #[tokio::test]
    async fn test_fifo_order_across_producers() {
        let (sender, queue) = channel(8);
        let other = sender.clone();

        for member in 1..=3 {
            let (req, _reply) = ReservationRequest::new(BookId(1), MemberId(member));
            sender.enqueue(req).await.unwrap();
        }
        let (req, _reply) = ReservationRequest::new(BookId(1), MemberId(4));
        other.enqueue(req).await.unwrap();

        for expected in 1..=4 {
            let req = queue.dequeue().await.unwrap();
            assert_eq!(req.member_id, MemberId(expected));
        }
    }

    #[tokio::test]
    async fn test_closes_after_senders_dropped_and_drained() {
        let (sender, queue) = channel(4);
        let (req, _reply) = ReservationRequest::new(BookId(9), MemberId(1));
        sender.enqueue(req).await.unwrap();
        drop(sender);

        assert!(queue.dequeue().await.is_some());
        assert!(queue.dequeue().await.is_none());
        assert!(queue.clone().dequeue().await.is_none());
    }

    #[tokio::test]
    async fn test_full_queue_applies_backpressure() {
        let (sender, queue) = channel(1);
        let (first, _r1) = ReservationRequest::new(BookId(1), MemberId(1));
        sender.enqueue(first).await.unwrap();

        let (second, _r2) = ReservationRequest::new(BookId(1), MemberId(2));
        let blocked = tokio::time::timeout(Duration::from_millis(50), sender.enqueue(second)).await;
        assert!(blocked.is_err(), "enqueue should wait while the queue is full");

        let producer = sender.clone();
        let pending = tokio::spawn(async move {
            let (third, _r3) = ReservationRequest::new(BookId(1), MemberId(3));
            producer.enqueue(third).await
        });
        assert_eq!(queue.dequeue().await.unwrap().member_id, MemberId(1));
        pending.await.unwrap().unwrap();
        assert_eq!(queue.dequeue().await.unwrap().member_id, MemberId(3));
    }

    #[tokio::test]
    async fn test_enqueue_after_consumer_dropped() {
        let (sender, queue) = channel(4);
        drop(queue);
        let (req, _reply) = ReservationRequest::new(BookId(1), MemberId(1));
        assert_eq!(sender.enqueue(req).await, Err(LibraryError::QueueClosed));
    }
}
