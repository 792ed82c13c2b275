/*!
 * Error Types
 * Centralized error handling with thiserror and miette support
 */

use miette::Diagnostic;
use thiserror::Error;

/// Construction-time validation errors
///
/// All parameters are validated once, before any state is shared with worker
/// threads. A failed constructor leaves nothing partially built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("channel capacity must be at least 1")]
    #[diagnostic(
        code(sync_core::zero_capacity),
        help("A bounded channel needs at least one slot to hand items off through.")
    )]
    ZeroCapacity,

    #[error("reader limit must be at least 1")]
    #[diagnostic(
        code(sync_core::zero_max_readers),
        help("A coordinator with no reader slots could never admit a read.")
    )]
    ZeroMaxReaders,

    #[error("minimum block size must be at least 1")]
    #[diagnostic(
        code(sync_core::zero_min_block_size),
        help("The partition floor bounds worker count; zero would divide by zero.")
    )]
    ZeroMinBlockSize,

    #[error("worker cap must be at least 1")]
    #[diagnostic(
        code(sync_core::zero_max_workers),
        help("Capping workers at zero would leave no thread to run a partition.")
    )]
    ZeroMaxWorkers,
}

/// Errors for the timeout and cancellable wait variants
///
/// The plain blocking operations (`put`, `take`, `read`, `write`) have no
/// runtime error: they park until their predicate holds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Diagnostic)]
pub enum WaitError {
    #[error("wait operation timed out")]
    #[diagnostic(code(sync_core::wait_timeout))]
    Timeout,

    #[error("wait was cancelled by shutdown")]
    #[diagnostic(code(sync_core::wait_cancelled))]
    Cancelled,
}
