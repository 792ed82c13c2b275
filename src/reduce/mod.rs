/*!
 * Partitioned Parallel Reduction
 *
 * Splits a slice into contiguous blocks, folds each on its own thread, and
 * combines the partials sequentially in partition order.
 *
 * # Determinism
 *
 * For any associative combine, folding contiguous partitions and combining
 * them left-to-right reproduces the sequential left-fold exactly, independent
 * of partition count and scheduling order. Associativity is the only
 * requirement; commutativity is not assumed.
 */

mod config;
mod parallel;

pub use config::ReduceConfig;
pub use parallel::{parallel_reduce, parallel_reduce_with};
