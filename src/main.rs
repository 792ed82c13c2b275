/*!
 * sync-core Demo - Main Entry Point
 *
 * Wires the primitives together with the work simulator:
 * - a capacity-10 channel driven by one producer and one consumer
 * - a max_readers=3 coordinator driven by one writer and three readers
 * - a parallel reduction over a large input
 *
 * Runs the role loops for a fixed duration, triggers the shutdown flag,
 * and joins every worker before exiting.
 */

use std::error::Error;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use sync_core::{
    parallel_reduce, sim, spawn_consumers, spawn_producers, spawn_readers, spawn_writers,
    BoundedChannel, RwCoordinator, ShutdownFlag,
};

/// Initialize structured tracing: EnvFilter plus a compact fmt layer
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_names(true)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("sync-core demo starting");

    let shutdown = ShutdownFlag::new();

    // Producer/consumer pipeline over a bounded channel
    let channel = Arc::new(BoundedChannel::new(10)?);
    let producers = spawn_producers(1, channel.clone(), shutdown.clone(), || {
        let item = sim::produce_value(10..=50);
        info!(item, "produced");
        item
    });
    let consumers = spawn_consumers(1, channel.clone(), shutdown.clone(), |item| {
        sim::think(10..=50);
        info!(item, "consumed");
    });

    // Writer-priority readers/writer coordination over a shared counter
    let coordinator = Arc::new(RwCoordinator::new(3, 0u64)?);
    let writers = spawn_writers(
        1,
        coordinator.clone(),
        shutdown.clone(),
        || sim::think(30..=50),
        |value| {
            *value += 1;
            info!(value = *value, "wrote");
        },
    );
    let readers = spawn_readers(
        3,
        coordinator.clone(),
        shutdown.clone(),
        || sim::think(10..=30),
        |value| info!(value = *value, "read"),
    );

    // One-shot parallel reduction while the role loops run
    let data = vec![1u64; 1_000_000];
    let total = parallel_reduce(&data, 0, |a, b| a + b);
    info!(total, "parallel reduction complete");

    // Terminate the role loops after a fixed duration
    thread::sleep(Duration::from_secs(2));
    info!("triggering shutdown");
    shutdown.trigger();

    producers.join();
    consumers.join();
    writers.join();
    readers.join();

    info!(
        final_value = coordinator.get(),
        remaining_items = channel.len(),
        "sync-core demo complete"
    );
    Ok(())
}
