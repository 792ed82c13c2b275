/*!
 * Reduction Configuration
 *
 * Runtime tuning for partition sizing and worker count
 */

use crate::errors::ConfigError;
use tracing::warn;

/// Partitioning knobs for [`parallel_reduce_with`](super::parallel_reduce_with)
///
/// The partition count is `min(workers, ceil(len / min_block_size))`, where
/// `workers` defaults to the machine's available parallelism. The block-size
/// floor keeps trivially small inputs from spawning threads at all.
#[derive(Debug, Clone)]
pub struct ReduceConfig {
    /// Smallest block worth giving to a worker
    pub min_block_size: usize,
    /// Cap on worker threads; `None` means available parallelism
    pub max_workers: Option<usize>,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            min_block_size: 25,
            max_workers: None,
        }
    }
}

impl ReduceConfig {
    /// Pin the worker cap, e.g. to make partition counts reproducible in tests
    pub const fn with_workers(workers: usize) -> Self {
        Self {
            min_block_size: 25,
            max_workers: Some(workers),
        }
    }

    /// Fail fast on zero-valued knobs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_block_size == 0 {
            return Err(ConfigError::ZeroMinBlockSize);
        }
        if self.max_workers == Some(0) {
            return Err(ConfigError::ZeroMaxWorkers);
        }
        Ok(())
    }

    /// Partition count for an input of `len` elements; at least 1
    pub(crate) fn partition_count(&self, len: usize) -> usize {
        let by_size = (len + self.min_block_size - 1) / self.min_block_size;
        let workers = self.max_workers.unwrap_or_else(available_workers);
        workers.min(by_size).max(1)
    }
}

fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or_else(|_| {
            warn!("failed to detect CPU count, defaulting to 8");
            8
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ReduceConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_block_size_rejected() {
        let config = ReduceConfig {
            min_block_size: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinBlockSize));
    }

    #[test]
    fn zero_worker_cap_rejected() {
        let config = ReduceConfig {
            max_workers: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxWorkers));
    }

    #[test]
    fn block_size_floor_limits_partitions() {
        let config = ReduceConfig {
            min_block_size: 100,
            max_workers: Some(64),
        };
        // 250 elements / floor 100 -> at most ceil(250/100) = 3 partitions
        assert_eq!(config.partition_count(250), 3);
    }

    #[test]
    fn worker_cap_limits_partitions() {
        let config = ReduceConfig {
            min_block_size: 1,
            max_workers: Some(4),
        };
        assert_eq!(config.partition_count(1_000), 4);
    }

    #[test]
    fn at_least_one_partition() {
        let config = ReduceConfig::with_workers(8);
        assert_eq!(config.partition_count(0), 1);
        assert_eq!(config.partition_count(1), 1);
    }
}
