/*!
 * Cooperative Shutdown Flag
 *
 * Termination is signaled via a polled flag rather than by interrupting a
 * blocked wait. Role loops read the flag once per iteration before attempting
 * a blocking operation.
 *
 * # Liveness Caveat
 *
 * Polling alone is cooperative, not preemptive: a thread already parked
 * waiting for a slot or an item will not observe the flag until a matching
 * counterpart operation unblocks it. The `_cancellable` channel variants close
 * that gap by re-checking the flag inside the wait loop on a bounded tick
 * ([`CANCEL_TICK`]), so shutdown latency is bounded by the tick rather than by
 * peer activity.
 */

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// How often a parked cancellable wait re-checks the flag.
pub const CANCEL_TICK: Duration = Duration::from_millis(50);

/// Cloneable handle to a shared exit flag, read under its own lock.
///
/// Clones observe the same flag. The core only ever consumes the current
/// boolean value; who sets it (a timer, a signal handler, a test) is the
/// caller's business.
#[derive(Clone, Debug, Default)]
pub struct ShutdownFlag {
    inner: Arc<Mutex<bool>>,
}

impl ShutdownFlag {
    /// Create a flag in the not-triggered state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag; idempotent
    pub fn trigger(&self) {
        *self.inner.lock() = true;
    }

    /// Current value of the flag
    pub fn is_triggered(&self) -> bool {
        *self.inner.lock()
    }
}
