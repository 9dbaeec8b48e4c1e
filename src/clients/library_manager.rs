use crate::catalog::CatalogStore;
use crate::error::LibraryError;
use crate::model::{Book, BookCreate, BookId, Member, MemberCreate, MemberId};
use async_trait::async_trait;

/// The library's public operations.
///
/// Implementors supply access to the [`CatalogStore`] and the reservation entry
/// point. Catalog CRUD, listings and lending are provided on top of the store,
/// each as a single locked operation.
#[async_trait]
pub trait LibraryManager: Send + Sync {
    /// Access the shared catalog.
    fn store(&self) -> &CatalogStore;

    /// Reserve `book_id` for `member_id`. A committed hold lapses after the reservation window.
    async fn reserve_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError>;

    #[tracing::instrument(skip(self))]
    async fn add_book(&self, params: BookCreate) -> BookId {
        tracing::debug!("Adding book");
        self.store().add_book(params).await
    }

    /// Remove a book whatever its state. Returns whether it existed.
    #[tracing::instrument(skip(self))]
    async fn remove_book(&self, id: BookId) -> bool {
        tracing::debug!("Removing book");
        self.store().remove_book(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn register_member(&self, params: MemberCreate) -> MemberId {
        tracing::debug!("Registering member");
        self.store().register_member(params).await
    }

    /// Register a member unless the id is already known. Returns whether it registered.
    #[tracing::instrument(skip(self))]
    async fn register_member_if_absent(&self, params: MemberCreate) -> bool {
        tracing::debug!("Registering member if absent");
        self.store().register_member_if_absent(params).await
    }

    async fn get_book(&self, id: BookId) -> Option<Book> {
        self.store().get_book(id).await
    }

    async fn get_member(&self, id: MemberId) -> Option<Member> {
        self.store().get_member(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn borrow_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        tracing::debug!("Borrowing book");
        self.store().borrow_book(book_id, member_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn return_book(&self, book_id: BookId, member_id: MemberId) -> Result<(), LibraryError> {
        tracing::debug!("Returning book");
        self.store().return_book(book_id, member_id).await
    }

    /// Books neither borrowed nor reserved, ordered by id.
    async fn list_available_books(&self) -> Vec<Book> {
        self.store().list_available().await
    }

    /// The member's borrowed snapshots, empty for unknown members.
    async fn list_borrowed_books(&self, member_id: MemberId) -> Vec<Book> {
        self.store().list_borrowed(member_id).await
    }
}
