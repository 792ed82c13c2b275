/*!
 * Bounded Ring-Buffer Channel
 *
 * Blocking `put`/`take` over a fixed-capacity ring, plus non-blocking,
 * timeout, and cancellable variants.
 */

use crate::errors::{ConfigError, WaitError};
use crate::shutdown::{ShutdownFlag, CANCEL_TICK};
use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Ring state, all mutated under one lock.
///
/// Invariant: `occupied` slots starting at `read_index` are `Some`, the other
/// `capacity - occupied` are `None`; `occupied` is always in `[0, capacity]`.
#[derive(Debug)]
struct Ring<T> {
    slots: Box<[Option<T>]>,
    write_index: usize,
    read_index: usize,
    occupied: usize,
}

impl<T> Ring<T> {
    fn store(&mut self, item: T) {
        debug_assert!(self.occupied < self.slots.len());
        debug_assert!(self.slots[self.write_index].is_none());
        self.slots[self.write_index] = Some(item);
        self.write_index = (self.write_index + 1) % self.slots.len();
        self.occupied += 1;
    }

    fn load(&mut self) -> T {
        debug_assert!(self.occupied > 0);
        let item = self.slots[self.read_index]
            .take()
            .unwrap_or_else(|| unreachable!("occupied slot was empty"));
        self.read_index = (self.read_index + 1) % self.slots.len();
        self.occupied -= 1;
        item
    }
}

/// Fixed-capacity FIFO channel
///
/// Only the index updates and the availability signals are inside the
/// critical section; whatever computation produces or consumes the item
/// belongs outside it, in the caller.
///
/// # Examples
///
/// ```
/// use sync_core::BoundedChannel;
///
/// let chan = BoundedChannel::new(2).unwrap();
/// chan.put(1);
/// chan.put(2);
/// assert_eq!(chan.take(), 1);
/// assert_eq!(chan.take(), 2);
/// ```
#[derive(Debug)]
pub struct BoundedChannel<T> {
    ring: Mutex<Ring<T>>,
    /// Signalled by `take` once a slot has been vacated
    space_available: Condvar,
    /// Signalled by `put` once a slot has been filled
    item_available: Condvar,
    capacity: usize,
}

impl<T> BoundedChannel<T> {
    /// Create a channel with `capacity` slots
    ///
    /// Fails fast with [`ConfigError::ZeroCapacity`] for a zero capacity;
    /// nothing partially built is observable.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            ring: Mutex::new(Ring {
                slots: slots.into_boxed_slice(),
                write_index: 0,
                read_index: 0,
                occupied: 0,
            }),
            space_available: Condvar::new(),
            item_available: Condvar::new(),
            capacity,
        })
    }

    /// Block until a slot is free, then deposit `item`
    pub fn put(&self, item: T) {
        let mut ring = self.ring.lock();
        while ring.occupied == self.capacity {
            self.space_available.wait(&mut ring);
        }
        ring.store(item);
        drop(ring);
        self.item_available.notify_one();
    }

    /// Block until a slot is filled, then return its item
    pub fn take(&self) -> T {
        let mut ring = self.ring.lock();
        while ring.occupied == 0 {
            self.item_available.wait(&mut ring);
        }
        let item = ring.load();
        drop(ring);
        self.space_available.notify_one();
        item
    }

    /// Deposit `item` if a slot is free right now; hand it back otherwise
    pub fn try_put(&self, item: T) -> Result<(), T> {
        let mut ring = self.ring.lock();
        if ring.occupied == self.capacity {
            return Err(item);
        }
        ring.store(item);
        drop(ring);
        self.item_available.notify_one();
        Ok(())
    }

    /// Return an item if one is available right now
    pub fn try_take(&self) -> Option<T> {
        let mut ring = self.ring.lock();
        if ring.occupied == 0 {
            return None;
        }
        let item = ring.load();
        drop(ring);
        self.space_available.notify_one();
        Some(item)
    }

    /// Like [`take`](Self::take), but give up after `timeout`
    pub fn take_timeout(&self, timeout: Duration) -> Result<T, WaitError> {
        let deadline = Instant::now() + timeout;
        let mut ring = self.ring.lock();
        while ring.occupied == 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(WaitError::Timeout);
            }
            let _ = self.item_available.wait_for(&mut ring, remaining);
        }
        let item = ring.load();
        drop(ring);
        self.space_available.notify_one();
        Ok(item)
    }

    /// Like [`put`](Self::put), but abandon the wait once `shutdown` triggers
    ///
    /// The flag is re-checked under the channel lock on every wake and at
    /// least once per [`CANCEL_TICK`], so cancellation latency is bounded by
    /// the tick even with no consumer running. On cancellation the undelivered
    /// item is handed back.
    pub fn put_cancellable(&self, item: T, shutdown: &ShutdownFlag) -> Result<(), T> {
        let mut ring = self.ring.lock();
        loop {
            if shutdown.is_triggered() {
                return Err(item);
            }
            if ring.occupied < self.capacity {
                break;
            }
            let _ = self.space_available.wait_for(&mut ring, CANCEL_TICK);
        }
        ring.store(item);
        drop(ring);
        self.item_available.notify_one();
        Ok(())
    }

    /// Like [`take`](Self::take), but abandon the wait once `shutdown` triggers
    ///
    /// Same bounded-latency contract as [`put_cancellable`](Self::put_cancellable).
    pub fn take_cancellable(&self, shutdown: &ShutdownFlag) -> Result<T, WaitError> {
        let mut ring = self.ring.lock();
        loop {
            if shutdown.is_triggered() {
                return Err(WaitError::Cancelled);
            }
            if ring.occupied > 0 {
                break;
            }
            let _ = self.item_available.wait_for(&mut ring, CANCEL_TICK);
        }
        let item = ring.load();
        drop(ring);
        self.space_available.notify_one();
        Ok(item)
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current occupancy, in `[0, capacity]`
    pub fn len(&self) -> usize {
        self.ring.lock().occupied
    }

    /// Whether no slot is currently filled
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
