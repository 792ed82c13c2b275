/*!
 * Readers/Writer Coordinator
 *
 * Guards a shared value for many concurrent readers or one exclusive writer,
 * with writer-priority fairness.
 *
 * # Fairness
 *
 * A single-holder "turn" lock imposes arrival order: readers take and
 * immediately release it, writers hold it across their whole acquisition.
 * Once a writer holds the turn, no reader arriving after it can cut ahead,
 * which bounds writer starvation. The trade-off is that a write-heavy
 * workload can monopolize the value; that is inherent to writer priority
 * and accepted here rather than mitigated.
 */

mod coordinator;

pub use coordinator::RwCoordinator;
