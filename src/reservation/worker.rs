//! # Reservation Workers
//!
//! A fixed pool of tasks draining the [`ReservationQueue`]. Each worker runs
//! the check-and-reserve protocol against the [`CatalogStore`], arms the
//! [`ExpirySupervisor`] for every hold it commits, and answers the request's
//! reply slot.
//!
//! The timer is armed before the reply is sent, so a hold always expires even
//! if the requester was cancelled and never sees the answer.
//!
//! Closing the queue is the only shutdown signal: once every sender is gone and
//! the buffer is drained, each worker's `dequeue` yields `None` and the loop ends.

use crate::catalog::CatalogStore;
use crate::framework::{ReservationQueue, ReservationRequest};
use crate::reservation::ExpirySupervisor;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Design default for the number of workers.
pub const DEFAULT_WORKER_COUNT: usize = 3;

/// Handles to the running reservation workers.
#[derive(Debug)]
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `worker_count` workers (at least one) on the current Tokio runtime.
    ///
    /// Worker ids start at 1 and only appear in logs.
    pub fn spawn(
        worker_count: usize,
        queue: ReservationQueue,
        store: CatalogStore,
        expiry: ExpirySupervisor,
    ) -> Self {
        let handles = (1..=worker_count.max(1))
            .map(|worker_id| {
                tokio::spawn(run_worker(
                    worker_id,
                    queue.clone(),
                    store.clone(),
                    expiry.clone(),
                ))
            })
            .collect();
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every worker to finish. Only returns once the queue is closed.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all workers exited cleanly
    /// - `Err(String)` if a worker task panicked
    pub async fn join(self) -> Result<(), String> {
        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("Reservation worker failed: {:?}", e))?;
        }
        Ok(())
    }
}

async fn run_worker(
    worker_id: usize,
    queue: ReservationQueue,
    store: CatalogStore,
    expiry: ExpirySupervisor,
) {
    info!(worker_id, "Reservation worker started");

    while let Some(request) = queue.dequeue().await {
        let ReservationRequest {
            book_id,
            member_id,
            respond_to,
        } = request;
        debug!(worker_id, %book_id, %member_id, "Reservation request");

        let result = store.try_reserve(book_id, member_id).await;
        match &result {
            Ok(()) => {
                info!(worker_id, %book_id, %member_id, "Reserved");
                drop(expiry.arm(book_id, member_id));
            }
            Err(e) => warn!(worker_id, %book_id, %member_id, error = %e, "Reservation rejected"),
        }

        if respond_to.send(result).is_err() {
            warn!(worker_id, %book_id, %member_id, "Requester dropped reply slot");
        }
    }

    info!(worker_id, "Reservation worker stopped");
}
