/*!
 * Writer-Priority Readers/Writer Coordinator
 *
 * State machine: `Idle -> Reading(k)` on the k-th concurrent reader entry
 * (1 <= k <= max_readers), `Reading(k) -> Reading(k-1) | Idle` on reader
 * exit, `Idle -> Writing` on writer entry, `Writing -> Idle` on writer exit.
 * `Reading` and `Writing` are mutually exclusive by construction.
 */

use crate::errors::ConfigError;
use parking_lot::{Condvar, Mutex};
use std::cell::UnsafeCell;

/// Admission phase of the protected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Reading(usize),
    Writing,
}

/// Shared value guarded for many readers or one writer
///
/// Reader admission is bounded by `max_readers`; a writer enters only from
/// `Idle` (all readers drained) and excludes everything while active. See the
/// module docs for the fairness policy.
///
/// # Examples
///
/// ```
/// use sync_core::RwCoordinator;
///
/// let coord = RwCoordinator::new(3, 0).unwrap();
/// coord.write(|v| *v += 1);
/// assert_eq!(coord.read(|v| *v), 1);
/// ```
#[derive(Debug)]
pub struct RwCoordinator<V> {
    /// Fairness gate: taken briefly by readers, held across acquisition by writers
    turn: Mutex<()>,
    phase: Mutex<Phase>,
    phase_changed: Condvar,
    value: UnsafeCell<V>,
    max_readers: usize,
}

// SAFETY: the phase machine guarantees the value is accessed either by up to
// max_readers shared borrows (Reading) or one exclusive borrow (Writing),
// never both. Shared access across threads needs V: Sync, moving exclusive
// access across threads needs V: Send.
unsafe impl<V: Send + Sync> Sync for RwCoordinator<V> {}
unsafe impl<V: Send> Send for RwCoordinator<V> {}

/// Decrements the reader count on drop, so a panicking read callback still
/// releases its admission.
struct ReaderSlot<'a, V>(&'a RwCoordinator<V>);

impl<V> Drop for ReaderSlot<'_, V> {
    fn drop(&mut self) {
        let mut phase = self.0.phase.lock();
        *phase = match *phase {
            Phase::Reading(1) => Phase::Idle,
            Phase::Reading(k) => Phase::Reading(k - 1),
            other => unreachable!("reader exit from {other:?}"),
        };
        drop(phase);
        self.0.phase_changed.notify_all();
    }
}

/// Returns the phase to `Idle` on drop, releasing writer exclusivity.
struct WriterSlot<'a, V>(&'a RwCoordinator<V>);

impl<V> Drop for WriterSlot<'_, V> {
    fn drop(&mut self) {
        let mut phase = self.0.phase.lock();
        debug_assert_eq!(*phase, Phase::Writing);
        *phase = Phase::Idle;
        drop(phase);
        self.0.phase_changed.notify_all();
    }
}

impl<V> RwCoordinator<V> {
    /// Create a coordinator admitting up to `max_readers` concurrent readers
    ///
    /// Fails fast with [`ConfigError::ZeroMaxReaders`] for a zero limit.
    pub fn new(max_readers: usize, initial: V) -> Result<Self, ConfigError> {
        if max_readers == 0 {
            return Err(ConfigError::ZeroMaxReaders);
        }

        Ok(Self {
            turn: Mutex::new(()),
            phase: Mutex::new(Phase::Idle),
            phase_changed: Condvar::new(),
            value: UnsafeCell::new(initial),
            max_readers,
        })
    }

    /// Run `f` against the shared value with up to `max_readers - 1` other readers
    ///
    /// Blocks while a writer is active or the reader pool is full. Passing
    /// through the turn gate first means a pending writer is served before
    /// readers that arrive after it.
    pub fn read<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        {
            let _turn = self.turn.lock();
        }

        let mut phase = self.phase.lock();
        loop {
            match *phase {
                Phase::Idle => {
                    *phase = Phase::Reading(1);
                    break;
                }
                Phase::Reading(k) if k < self.max_readers => {
                    *phase = Phase::Reading(k + 1);
                    break;
                }
                _ => self.phase_changed.wait(&mut phase),
            }
        }
        drop(phase);

        let _slot = ReaderSlot(self);
        // SAFETY: phase is Reading(k >= 1); no writer can enter until the
        // count returns to Idle, so all concurrent access is shared.
        f(unsafe { &*self.value.get() })
    }

    /// Run `f` with exclusive access to the shared value
    ///
    /// Holds the turn gate for the whole acquisition, waits for active
    /// readers to drain to zero, then excludes all access until `f` returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let _turn = self.turn.lock();

        let mut phase = self.phase.lock();
        while *phase != Phase::Idle {
            self.phase_changed.wait(&mut phase);
        }
        *phase = Phase::Writing;
        drop(phase);

        let _slot = WriterSlot(self);
        // SAFETY: phase is Writing; nothing else is admitted until the slot
        // drops, so this is the only access.
        f(unsafe { &mut *self.value.get() })
        // WriterSlot drops before _turn: write state released, then the gate
    }

    /// Snapshot of the current value
    pub fn get(&self) -> V
    where
        V: Clone,
    {
        self.read(V::clone)
    }

    /// Reader admission bound
    pub fn max_readers(&self) -> usize {
        self.max_readers
    }

    /// Consume the coordinator and return the protected value
    pub fn into_inner(self) -> V {
        self.value.into_inner()
    }
}
