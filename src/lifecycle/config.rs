//! Library configuration loaded from environment variables.
//!
//! Every setting has a design default, so an empty environment gives the
//! standard setup: 50 queued requests, 3 workers, a 5 second reservation window.
//!
//! | Variable                      | Default | Meaning                          |
//! |-------------------------------|---------|----------------------------------|
//! | `LIBRARY_QUEUE_CAPACITY`      | 50      | Reservation queue capacity       |
//! | `LIBRARY_WORKER_COUNT`        | 3       | Number of reservation workers    |
//! | `LIBRARY_RESERVATION_TTL_MS`  | 5000    | Reservation window, milliseconds |

use crate::framework::DEFAULT_QUEUE_CAPACITY;
use crate::reservation::{DEFAULT_RESERVATION_TTL, DEFAULT_WORKER_COUNT};
use std::time::Duration;

/// Top-level library configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Capacity of the reservation queue. Producers wait when it is full.
    pub queue_capacity: usize,

    /// Number of concurrent reservation workers.
    pub worker_count: usize,

    /// How long a reservation is held before it auto-cancels.
    pub reservation_ttl: Duration,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            worker_count: DEFAULT_WORKER_COUNT,
            reservation_ttl: DEFAULT_RESERVATION_TTL,
        }
    }
}

impl LibraryConfig {
    /// Loads configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults; zero capacity
    /// and zero workers are raised to 1.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let ttl_ms = parse_env(
            "LIBRARY_RESERVATION_TTL_MS",
            defaults.reservation_ttl.as_millis() as u64,
        );

        Self::default()
            .with_queue_capacity(parse_env("LIBRARY_QUEUE_CAPACITY", defaults.queue_capacity))
            .with_worker_count(parse_env("LIBRARY_WORKER_COUNT", defaults.worker_count))
            .with_reservation_ttl(Duration::from_millis(ttl_ms))
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = count.max(1);
        self
    }

    pub fn with_reservation_ttl(mut self, ttl: Duration) -> Self {
        self.reservation_ttl = ttl;
        self
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
