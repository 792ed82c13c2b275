/*!
 * Deadlock-Free Pairwise Swap
 *
 * Exchanges the payloads of two peer entities without risking deadlock under
 * concurrent reciprocal swaps.
 *
 * # Protocol
 *
 * Both locks are taken with an all-or-nothing multi-acquire: try both, and if
 * either is unavailable release whatever was taken and retry after a backoff.
 * No address- or argument-determined lock order is imposed, so
 * `swap(a, b)` racing `swap(b, a)` cannot deadlock. A self-swap returns
 * immediately and never touches its own lock twice.
 */

mod pairwise;

pub use pairwise::{swap, Peer};
