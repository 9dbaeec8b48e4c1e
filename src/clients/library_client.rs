//! # Library Client
//!
//! The concrete [`LibraryManager`]. Reservations go through the bounded queue
//! to the worker pool; everything else goes straight to the shared store.
use crate::catalog::CatalogStore;
use crate::clients::library_manager::LibraryManager;
use crate::error::LibraryError;
use crate::framework::{ReservationRequest, ReservationSender};
use crate::model::{BookId, MemberId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the library. Cheap to clone.
///
/// Every clone keeps the reservation queue open, so drop clones before
/// [`LibrarySystem::shutdown`](crate::lifecycle::LibrarySystem::shutdown).
#[derive(Debug, Clone)]
pub struct LibraryClient {
    queue: ReservationSender,
    store: CatalogStore,
}

impl LibraryClient {
    pub fn new(queue: ReservationSender, store: CatalogStore) -> Self {
        Self { queue, store }
    }
}

#[async_trait]
impl LibraryManager for LibraryClient {
    fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Enqueues the request and waits for a worker's answer.
    ///
    /// Worker rejections are returned unchanged. On success the worker has
    /// already armed the expiry timer, so dropping this future after the
    /// hold is committed still lets the reservation lapse.
    #[instrument(skip(self))]
    async fn reserve_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        debug!("Sending reservation request");
        let (request, response) = ReservationRequest::new(book_id, member_id);
        self.queue.enqueue(request).await?;
        response.await.map_err(|_| LibraryError::WorkerDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_queue, expect_reservation};
    use crate::model::{BookCreate, MemberCreate};
    async fn seeded_store() -> CatalogStore {
        let store = CatalogStore::new();
        store.add_book(BookCreate::new(1, "Dune", "Frank Herbert")).await;
        store.register_member(MemberCreate::new(201, "Alice")).await;
        store
    }

    #[tokio::test]
    async fn test_reserve_failure_returned_verbatim() {
        let store = seeded_store().await;
        let (sender, mut receiver) = create_mock_queue(10);
        let client = LibraryClient::new(sender, store.clone());

        let reserve_task =
            tokio::spawn(async move { client.reserve_book(BookId(1), MemberId(201)).await });

        let (book_id, member_id, responder) = expect_reservation(&mut receiver)
            .await
            .expect("Expected reservation request");
        assert_eq!(book_id, BookId(1));
        assert_eq!(member_id, MemberId(201));

        responder
            .send(Err(LibraryError::AlreadyBorrowed(book_id)))
            .unwrap();

        let result = reserve_task.await.unwrap();
        assert_eq!(result, Err(LibraryError::AlreadyBorrowed(BookId(1))));
    }

    #[tokio::test]
    async fn test_reserve_success_leaves_hold_to_worker() {
        let store = seeded_store().await;
        let (sender, mut receiver) = create_mock_queue(10);
        let client = LibraryClient::new(sender, store.clone());

        let reserve_task =
            tokio::spawn(async move { client.reserve_book(BookId(1), MemberId(201)).await });

        // Play the worker: commit the hold, then answer.
        let (book_id, member_id, responder) = expect_reservation(&mut receiver).await.unwrap();
        store.try_reserve(book_id, member_id).await.unwrap();
        responder.send(Ok(())).unwrap();

        assert_eq!(reserve_task.await.unwrap(), Ok(()));
        assert_eq!(
            store.get_book(BookId(1)).await.unwrap().reserved_by,
            Some(MemberId(201))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_is_worker_dropped() {
        let store = seeded_store().await;
        let (sender, mut receiver) = create_mock_queue(10);
        let client = LibraryClient::new(sender, store.clone());

        let reserve_task =
            tokio::spawn(async move { client.reserve_book(BookId(1), MemberId(201)).await });

        let (_, _, responder) = expect_reservation(&mut receiver).await.unwrap();
        drop(responder);

        assert_eq!(reserve_task.await.unwrap(), Err(LibraryError::WorkerDropped));
    }

    #[tokio::test]
    async fn test_closed_queue_is_queue_closed() {
        let store = seeded_store().await;
        let (sender, receiver) = create_mock_queue(10);
        drop(receiver);
        let client = LibraryClient::new(sender, store.clone());

        assert_eq!(
            client.reserve_book(BookId(1), MemberId(201)).await,
            Err(LibraryError::QueueClosed)
        );
    }

    #[tokio::test]
    async fn test_provided_methods_use_the_store() {
        let store = CatalogStore::new();
        let (sender, _receiver) = create_mock_queue(10);
        let client = LibraryClient::new(sender, store.clone());

        client.add_book(BookCreate::new(7, "Dune", "Frank Herbert")).await;
        client.register_member(MemberCreate::new(201, "Alice")).await;
        client.borrow_book(BookId(7), MemberId(201)).await.unwrap();

        assert!(client.list_available_books().await.is_empty());
        assert_eq!(client.list_borrowed_books(MemberId(201)).await.len(), 1);

        client.return_book(BookId(7), MemberId(201)).await.unwrap();
        assert_eq!(client.list_available_books().await.len(), 1);
        assert!(client.list_borrowed_books(MemberId(201)).await.is_empty());

        assert!(client.remove_book(BookId(7)).await);
        assert!(client.get_book(BookId(7)).await.is_none());
        assert!(client.get_member(MemberId(201)).await.is_some());
    }
}
