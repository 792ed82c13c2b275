/*!
 * Peer Entities and the Swap Protocol
 *
 * # Backoff
 *
 * A failed paired acquisition retries through three phases: a tight
 * `spin_loop` phase for the common sub-microsecond hold, a `yield_now`
 * phase, then exponentially increasing sleeps capped at 100µs. Locks are
 * never held while pausing.
 */

use parking_lot::Mutex;
use std::hint;
use std::thread;
use std::time::Duration;

/// A peer entity: a private lock around a mutable payload
///
/// # Examples
///
/// ```
/// use sync_core::{swap, Peer};
///
/// let a = Peer::new(1);
/// let b = Peer::new(2);
/// swap(&a, &b);
/// assert_eq!(a.with(|v| *v), 2);
/// assert_eq!(b.with(|v| *v), 1);
/// ```
pub struct Peer<T> {
    payload: Mutex<T>,
}

impl<T> Peer<T> {
    /// Create a peer owning `payload`
    pub fn new(payload: T) -> Self {
        Self {
            payload: Mutex::new(payload),
        }
    }

    /// Access the payload under the peer's own lock
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.payload.lock())
    }

    /// Exchange payloads with `other`; see [`swap`]
    pub fn swap(&self, other: &Self) {
        swap(self, other);
    }

    /// Consume the peer and return its payload
    pub fn into_inner(self) -> T {
        self.payload.into_inner()
    }
}

/// Retry pacing for the paired acquisition
struct Backoff {
    attempts: u32,
    sleep: Duration,
}

impl Backoff {
    const SPIN_PHASE: u32 = 10;
    const YIELD_PHASE: u32 = 50;
    const MAX_SLEEP: Duration = Duration::from_micros(100);

    fn new() -> Self {
        Self {
            attempts: 0,
            sleep: Duration::from_nanos(500),
        }
    }

    fn pause(&mut self) {
        self.attempts += 1;
        if self.attempts <= Self::SPIN_PHASE {
            hint::spin_loop();
        } else if self.attempts <= Self::YIELD_PHASE {
            thread::yield_now();
        } else {
            thread::sleep(self.sleep);
            self.sleep = (self.sleep * 2).min(Self::MAX_SLEEP);
        }
    }
}

/// Exchange the payloads of `a` and `b`
///
/// Identical peers (same allocation) are a no-op. Otherwise both locks are
/// acquired together or not at all; with both held the exchange is a single
/// `mem::swap`, so no observer ever sees a partially-swapped state. Release
/// is guard-based and happens on every exit path.
pub fn swap<T>(a: &Peer<T>, b: &Peer<T>) {
    if std::ptr::eq(a, b) {
        return;
    }

    let mut backoff = Backoff::new();
    loop {
        if let Some(mut first) = a.payload.try_lock() {
            if let Some(mut second) = b.payload.try_lock() {
                std::mem::swap(&mut *first, &mut *second);
                return;
            }
            // Release the partial acquisition before pausing
        }
        backoff.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn exchanges_payloads() {
        let a = Peer::new("left".to_string());
        let b = Peer::new("right".to_string());

        swap(&a, &b);

        assert_eq!(a.with(|v| v.clone()), "right");
        assert_eq!(b.with(|v| v.clone()), "left");
    }

    #[test]
    fn self_swap_is_noop() {
        let a = Peer::new(9);
        // Must return without blocking on its own lock
        swap(&a, &a);
        assert_eq!(a.with(|v| *v), 9);
    }

    #[test]
    fn self_swap_through_clones_of_same_arc() {
        let a = Arc::new(Peer::new(3));
        let b = a.clone();
        swap(&a, &b);
        assert_eq!(a.with(|v| *v), 3);
    }

    #[test]
    fn swap_while_one_side_briefly_held() {
        let a = Arc::new(Peer::new(1));
        let b = Arc::new(Peer::new(2));

        let a_clone = a.clone();
        let b_clone = b.clone();
        let handle = thread::spawn(move || swap(&a_clone, &b_clone));

        // Contend on a's lock from this thread while the swap retries
        for _ in 0..100 {
            a.with(|_| {});
        }

        handle.join().unwrap();
        let total = a.with(|v| *v) + b.with(|v| *v);
        assert_eq!(total, 3);
    }

    #[test]
    fn into_inner_returns_payload() {
        let a = Peer::new(vec![1, 2]);
        assert_eq!(a.into_inner(), vec![1, 2]);
    }
}
