/*!
 * Worker Pool
 *
 * Join-handle bundle for one role's threads
 */

use std::thread::JoinHandle;

/// Handles for the threads of one worker role
///
/// Dropping the pool without [`join`](Self::join)ing detaches the threads;
/// orderly teardown is trigger-the-flag, then join.
pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub(crate) fn from_handles(handles: Vec<JoinHandle<()>>) -> Self {
        Self { handles }
    }

    /// Number of workers in the pool
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the pool holds no workers
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Join every worker
    ///
    /// A panic from a worker's body (a failed work callback terminates that
    /// worker's loop) is re-raised here rather than swallowed; the remaining
    /// handles are joined first so no thread outlives the pool.
    pub fn join(self) {
        let mut first_panic = None;
        for handle in self.handles {
            if let Err(panic) = handle.join() {
                first_panic.get_or_insert(panic);
            }
        }
        if let Some(panic) = first_panic {
            std::panic::resume_unwind(panic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn joins_all_workers() {
        let handles = (0..4).map(|_| thread::spawn(|| {})).collect();
        let pool = WorkerPool::from_handles(handles);
        assert_eq!(pool.len(), 4);
        pool.join();
    }

    #[test]
    fn join_reraises_worker_panic() {
        let handles = vec![
            thread::spawn(|| {}),
            thread::spawn(|| panic!("worker body failed")),
        ];
        let pool = WorkerPool::from_handles(handles);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || pool.join()));
        assert!(outcome.is_err());
    }
}
