//! The concurrent side of reservations: the [`WorkerPool`] that services the
//! queue and the [`ExpirySupervisor`] that revokes stale holds.

pub mod expiry;
pub mod worker;

pub use expiry::*;
pub use worker::*;
