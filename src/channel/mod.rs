/*!
 * Bounded Producer/Consumer Channel
 *
 * Fixed-capacity FIFO hand-off between producer and consumer roles.
 *
 * # Architecture
 *
 * A ring buffer guarded by one `parking_lot::Mutex`, with two condvars
 * standing in for the classic `spaces` / `items` counting semaphores:
 * `put` parks on free space, `take` parks on occupancy, and each signals
 * the other side's condvar after updating the ring.
 *
 * # Guarantees
 *
 * - A slot is never read before it is written, nor overwritten before its
 *   previous reader has vacated it.
 * - Single producer / single consumer: strict FIFO. Multiple producers or
 *   consumers: no cross-producer ordering, but every slot hand-off is
 *   atomic and exactly-once.
 */

mod bounded;

pub use bounded::BoundedChannel;
