/*!
 * Worker Role Harness
 *
 * Spawns configurable counts of producer/consumer threads against a
 * [`BoundedChannel`](crate::BoundedChannel) and reader/writer threads against
 * an [`RwCoordinator`](crate::RwCoordinator), each loop driven by a
 * [`ShutdownFlag`](crate::ShutdownFlag).
 *
 * Every loop polls the flag once per iteration before its blocking operation
 * and runs the caller's work body outside the critical section. Channel loops
 * use the cancellable variants, so a parked worker wakes within the
 * cancellation tick; coordinator operations are short by contract and drain
 * on their own once the flag stops new iterations.
 */

mod pool;
mod runner;

pub use pool::WorkerPool;
pub use runner::{spawn_consumers, spawn_producers, spawn_readers, spawn_writers};
