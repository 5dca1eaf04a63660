//! Helpers for driving a shared value from many threads at once.
//!
//! Spawning one OS thread per task does not scale to the task counts the
//! stress tests use, so tasks are dealt round-robin across a fixed pool of
//! scoped workers. A [`Barrier`] holds every worker until all have started,
//! which maximises contention on whatever the tasks share.
//!
//! # Examples
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use test_helpers::fan_out;
//!
//! let hits = AtomicUsize::new(0);
//! fan_out(4, 1_000, |_| {
//!     hits.fetch_add(1, Ordering::Relaxed);
//! })
//! .expect("workers finish");
//! assert_eq!(hits.load(Ordering::Relaxed), 1_000);
//! ```

use anyhow::{Result, anyhow, ensure};
use std::sync::Barrier;
use std::thread;

/// Runs `task` once for every index in `0..tasks`, spread over `workers`
/// threads, and joins them all.
///
/// # Errors
///
/// Returns an error when `workers` is zero or when any worker panics.
pub fn fan_out<F>(workers: usize, tasks: usize, task: F) -> Result<()>
where
    F: Fn(usize) + Sync,
{
    ensure!(workers > 0, "fan_out requires at least one worker");
    let barrier = Barrier::new(workers);
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let barrier = &barrier;
                let task = &task;
                scope.spawn(move || {
                    barrier.wait();
                    for index in (worker..tasks).step_by(workers) {
                        task(index);
                    }
                })
            })
            .collect();
        handles
            .into_iter()
            .enumerate()
            .try_for_each(|(worker, handle)| {
                handle
                    .join()
                    .map_err(|_panic| anyhow!("worker {worker} panicked"))
            })
    })
}
