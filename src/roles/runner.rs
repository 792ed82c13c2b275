/*!
 * Role Loops
 *
 * The original topology was one producer + one consumer on the channel and
 * one writer + a fixed trio of readers on the coordinator; here every role
 * takes a configurable count without changing the coordination contract.
 */

use super::pool::WorkerPool;
use crate::channel::BoundedChannel;
use crate::rw::RwCoordinator;
use crate::shutdown::ShutdownFlag;
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Spawn `count` producer loops feeding `channel`
///
/// Each iteration polls `shutdown`, runs `produce` outside the critical
/// section, then deposits the item with a cancellable put.
pub fn spawn_producers<T, F>(
    count: usize,
    channel: Arc<BoundedChannel<T>>,
    shutdown: ShutdownFlag,
    produce: F,
) -> WorkerPool
where
    T: Send + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    let produce = Arc::new(produce);
    let handles = (0..count)
        .map(|worker| {
            let channel = channel.clone();
            let shutdown = shutdown.clone();
            let produce = produce.clone();
            thread::spawn(move || {
                debug!(worker, role = "producer", "started");
                loop {
                    if shutdown.is_triggered() {
                        break;
                    }
                    let item = produce();
                    if channel.put_cancellable(item, &shutdown).is_err() {
                        break;
                    }
                }
                debug!(worker, role = "producer", "stopped");
            })
        })
        .collect();
    WorkerPool::from_handles(handles)
}

/// Spawn `count` consumer loops draining `channel`
///
/// Each iteration polls `shutdown`, takes an item with a cancellable take,
/// then runs `consume` outside the critical section.
pub fn spawn_consumers<T, F>(
    count: usize,
    channel: Arc<BoundedChannel<T>>,
    shutdown: ShutdownFlag,
    consume: F,
) -> WorkerPool
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let consume = Arc::new(consume);
    let handles = (0..count)
        .map(|worker| {
            let channel = channel.clone();
            let shutdown = shutdown.clone();
            let consume = consume.clone();
            thread::spawn(move || {
                debug!(worker, role = "consumer", "started");
                loop {
                    if shutdown.is_triggered() {
                        break;
                    }
                    match channel.take_cancellable(&shutdown) {
                        Ok(item) => consume(item),
                        Err(_) => break,
                    }
                }
                debug!(worker, role = "consumer", "stopped");
            })
        })
        .collect();
    WorkerPool::from_handles(handles)
}

/// Spawn `count` reader loops against `coordinator`
///
/// `pace` runs outside any lock (simulated think-time); `observe` runs under
/// shared admission.
pub fn spawn_readers<V, P, F>(
    count: usize,
    coordinator: Arc<RwCoordinator<V>>,
    shutdown: ShutdownFlag,
    pace: P,
    observe: F,
) -> WorkerPool
where
    V: Send + Sync + 'static,
    P: Fn() + Send + Sync + 'static,
    F: Fn(&V) + Send + Sync + 'static,
{
    let pace = Arc::new(pace);
    let observe = Arc::new(observe);
    let handles = (0..count)
        .map(|worker| {
            let coordinator = coordinator.clone();
            let shutdown = shutdown.clone();
            let pace = pace.clone();
            let observe = observe.clone();
            thread::spawn(move || {
                debug!(worker, role = "reader", "started");
                loop {
                    if shutdown.is_triggered() {
                        break;
                    }
                    pace();
                    coordinator.read(|value| observe(value));
                }
                debug!(worker, role = "reader", "stopped");
            })
        })
        .collect();
    WorkerPool::from_handles(handles)
}

/// Spawn `count` writer loops against `coordinator`
///
/// `pace` runs outside any lock; `mutate` runs under exclusive access.
pub fn spawn_writers<V, P, F>(
    count: usize,
    coordinator: Arc<RwCoordinator<V>>,
    shutdown: ShutdownFlag,
    pace: P,
    mutate: F,
) -> WorkerPool
where
    V: Send + Sync + 'static,
    P: Fn() + Send + Sync + 'static,
    F: Fn(&mut V) + Send + Sync + 'static,
{
    let pace = Arc::new(pace);
    let mutate = Arc::new(mutate);
    let handles = (0..count)
        .map(|worker| {
            let coordinator = coordinator.clone();
            let shutdown = shutdown.clone();
            let pace = pace.clone();
            let mutate = mutate.clone();
            thread::spawn(move || {
                debug!(worker, role = "writer", "started");
                loop {
                    if shutdown.is_triggered() {
                        break;
                    }
                    pace();
                    coordinator.write(|value| mutate(value));
                }
                debug!(worker, role = "writer", "stopped");
            })
        })
        .collect();
    WorkerPool::from_handles(handles)
}
