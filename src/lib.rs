/*!
 * sync-core
 *
 * A small suite of low-level concurrency primitives and one data-parallel
 * algorithm:
 * - [`BoundedChannel`]: fixed-capacity FIFO hand-off between producers and
 *   consumers
 * - [`RwCoordinator`]: many concurrent readers or one exclusive writer,
 *   writer-priority
 * - [`Peer`]/[`swap`]: deadlock-free pairwise state exchange
 * - [`parallel_reduce`]: partitioned parallel fold with deterministic results
 *
 * All primitives are leaf-level (no inter-component dependency) and are built
 * for true OS threads. The `roles`, `shutdown`, and `sim` modules provide the
 * worker harness, cooperative-exit flag, and work simulation around them.
 */

pub mod channel;
pub mod errors;
pub mod reduce;
pub mod roles;
pub mod rw;
pub mod shutdown;
pub mod sim;
pub mod swap;

// Re-exports
pub use channel::BoundedChannel;
pub use errors::{ConfigError, WaitError};
pub use reduce::{parallel_reduce, parallel_reduce_with, ReduceConfig};
pub use roles::{spawn_consumers, spawn_producers, spawn_readers, spawn_writers, WorkerPool};
pub use rw::RwCoordinator;
pub use shutdown::ShutdownFlag;
pub use swap::{swap, Peer};
