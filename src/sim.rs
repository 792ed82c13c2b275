/*!
 * Work Simulation
 *
 * Random latencies and payload values for the demo roles. Everything here
 * sleeps, so by construction it belongs outside every critical section;
 * the primitives never call into this module.
 */

use rand::Rng;
use std::ops::RangeInclusive;
use std::thread;
use std::time::Duration;

/// Sleep for a uniformly random number of milliseconds drawn from `range`
pub fn think(range: RangeInclusive<u64>) {
    let ms = rand::thread_rng().gen_range(range);
    thread::sleep(Duration::from_millis(ms));
}

/// Simulate producing a payload: random latency, then the latency as the value
pub fn produce_value(latency_ms: RangeInclusive<u64>) -> u64 {
    let ms = rand::thread_rng().gen_range(latency_ms);
    thread::sleep(Duration::from_millis(ms));
    ms
}
