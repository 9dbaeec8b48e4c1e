//! # Reservation Expiry
//!
//! Every successful reservation gets its own deferred task. The task sleeps
//! for the reservation window, then takes the store lock and clears the hold
//! only if the same member still holds it and the book was not borrowed.
//!
//! There is no cancellation path. A timer whose reservation was already
//! borrowed, expired or taken over finds nothing it owns and does nothing.

use crate::catalog::CatalogStore;
use crate::model::{BookId, MemberId};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Design default for the reservation window.
pub const DEFAULT_RESERVATION_TTL: Duration = Duration::from_secs(5);

/// Arms one-shot expiry timers against a [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct ExpirySupervisor {
    store: CatalogStore,
    ttl: Duration,
}

impl ExpirySupervisor {
    pub fn new(store: CatalogStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Spawns the timer for `(book_id, member_id)`.
    ///
    /// Workers drop the handle, which detaches the task. The handle
    /// resolves to `true` if this timer revoked the reservation.
    pub fn arm(&self, book_id: BookId, member_id: MemberId) -> JoinHandle<bool> {
        let store = self.store.clone();
        let ttl = self.ttl;
        debug!(%book_id, %member_id, ttl_ms = ttl.as_millis() as u64, "Expiry armed");

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let revoked = store.expire_reservation(book_id, member_id).await;
            if revoked {
                info!(%book_id, %member_id, "Reservation expired");
            } else {
                debug!(%book_id, %member_id, "Expiry no-op");
            }
            revoked
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookCreate, MemberCreate};

    const TTL: Duration = Duration::from_millis(30);

    async fn store_with_book() -> CatalogStore {
        let store = CatalogStore::new();
        store.add_book(BookCreate::new(1, "Dune", "Frank Herbert")).await;
        store.register_member(MemberCreate::new(201, "Alice")).await;
        store
    }

    #[tokio::test]
    async fn test_untouched_reservation_is_revoked() {
        let store = store_with_book().await;
        store.try_reserve(BookId(1), MemberId(201)).await.unwrap();

        let supervisor = ExpirySupervisor::new(store.clone(), TTL);
        assert!(supervisor.arm(BookId(1), MemberId(201)).await.unwrap());
        assert!(store.get_book(BookId(1)).await.unwrap().is_available());
    }

    #[tokio::test]
    async fn test_borrowed_reservation_survives() {
        let store = store_with_book().await;
        store.try_reserve(BookId(1), MemberId(201)).await.unwrap();

        let supervisor = ExpirySupervisor::new(store.clone(), TTL);
        let timer = supervisor.arm(BookId(1), MemberId(201));
        store.borrow_book(BookId(1), MemberId(201)).await.unwrap();

        assert!(!timer.await.unwrap());
        let book = store.get_book(BookId(1)).await.unwrap();
        assert!(book.is_borrowed());
        assert_eq!(book.reserved_by, None);
    }

    #[tokio::test]
    async fn test_removed_book_is_a_noop() {
        let store = store_with_book().await;
        store.try_reserve(BookId(1), MemberId(201)).await.unwrap();

        let supervisor = ExpirySupervisor::new(store.clone(), TTL);
        let timer = supervisor.arm(BookId(1), MemberId(201));
        store.remove_book(BookId(1)).await;

        assert!(!timer.await.unwrap());
    }
}
