/*!
 * Scoped-Thread Parallel Fold
 *
 * Each worker folds one contiguous block seeded from the block's own first
 * element; the caller's seed enters exactly once, in the final combine. A
 * seed that is not a true identity for the combine therefore contributes
 * once, not once per partition.
 */

use super::config::ReduceConfig;
use crate::errors::ConfigError;
use std::thread;

/// Reduce `items` under the default configuration
///
/// Equivalent to the sequential `items.iter().cloned().fold(init, combine)`
/// for any associative `combine`, bit-identical across runs and partition
/// counts. An empty slice returns `init` unchanged without spawning a worker.
///
/// # Examples
///
/// ```
/// use sync_core::parallel_reduce;
///
/// let data: Vec<u64> = (1..=100).collect();
/// assert_eq!(parallel_reduce(&data, 0, |a, b| a + b), 5050);
/// ```
pub fn parallel_reduce<T, F>(items: &[T], init: T, combine: F) -> T
where
    T: Clone + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    // The default config carries no zero knobs, so this cannot fail
    reduce_partitioned(items, init, &combine, &ReduceConfig::default())
}

/// Reduce `items` with explicit partitioning knobs
///
/// Fails fast if `config` carries a zero block-size floor or worker cap.
pub fn parallel_reduce_with<T, F>(
    items: &[T],
    init: T,
    combine: F,
    config: &ReduceConfig,
) -> Result<T, ConfigError>
where
    T: Clone + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    config.validate()?;
    Ok(reduce_partitioned(items, init, &combine, config))
}

fn reduce_partitioned<T, F>(items: &[T], init: T, combine: &F, config: &ReduceConfig) -> T
where
    T: Clone + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    if items.is_empty() {
        return init;
    }

    let partitions = config.partition_count(items.len());
    if partitions == 1 {
        return items.iter().cloned().fold(init, combine);
    }

    // partitions <= ceil(len / min_block_size) <= len, so block_size >= 1
    // and every block is non-empty
    let block_size = items.len() / partitions;

    let partials: Vec<T> = thread::scope(|scope| {
        let handles: Vec<_> = (0..partitions)
            .map(|index| {
                let start = index * block_size;
                let end = if index == partitions - 1 {
                    // Remainder folds into the last block
                    items.len()
                } else {
                    start + block_size
                };
                let block = &items[start..end];
                scope.spawn(move || fold_block(block, combine))
            })
            .collect();

        // Join in partition order; a worker panic propagates to the caller
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(partial) => partial,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    partials.into_iter().fold(init, combine)
}

/// Local fold over one non-empty block, seeded from its first element
fn fold_block<T, F>(block: &[T], combine: &F) -> T
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    let mut acc = block[0].clone();
    for item in &block[1..] {
        acc = combine(acc, item.clone());
    }
    acc
}
