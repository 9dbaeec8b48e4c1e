use crate::catalog::CatalogStore;
use crate::clients::LibraryClient;
use crate::framework::queue;
use crate::lifecycle::LibraryConfig;
use crate::reservation::{ExpirySupervisor, WorkerPool};
use tracing::{error, info};

/// The runtime orchestrator for the library.
///
/// `LibrarySystem` is responsible for:
/// - **Wiring**: one [`CatalogStore`] shared by the workers, the expiry timers and the client
/// - **Lifecycle**: starting the reservation workers and stopping them again
///
/// # Example
///
/// ```ignore
/// let system = LibrarySystem::new(LibraryConfig::default());
///
/// system.client.add_book(BookCreate::new(7, "Dune", "Frank Herbert")).await;
/// system.client.register_member(MemberCreate::new(201, "Alice")).await;
/// system.client.reserve_book(BookId(7), MemberId(201)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct LibrarySystem {
    /// Client for every library operation
    pub client: LibraryClient,

    /// Reservation workers (used for graceful shutdown)
    workers: WorkerPool,
}

impl LibrarySystem {
    /// Creates the store and queue, spawns the workers and returns a running system.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: LibraryConfig) -> Self {
        let store = CatalogStore::new();
        let (sender, reservations) = queue::channel(config.queue_capacity);

        let expiry = ExpirySupervisor::new(store.clone(), config.reservation_ttl);
        let workers = WorkerPool::spawn(config.worker_count, reservations, store.clone(), expiry);
        let client = LibraryClient::new(sender, store);

        info!(
            queue_capacity = config.queue_capacity,
            workers = workers.len(),
            ttl_ms = config.reservation_ttl.as_millis() as u64,
            "Library system started"
        );

        Self { client, workers }
    }

    /// Gracefully shuts down the reservation workers.
    ///
    /// Dropping the client closes the queue; workers finish whatever is still
    /// buffered and exit. Expiry timers already armed keep running on the
    /// runtime and still fire.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all workers shut down cleanly
    /// - `Err(String)` if a worker task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down library system...");

        drop(self.client);

        if let Err(e) = self.workers.join().await {
            error!(error = %e, "Worker shutdown failed");
            return Err(e);
        }

        info!("Library system shutdown complete.");
        Ok(())
    }
}
