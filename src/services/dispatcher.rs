//! Bounded fan-out of per-item jobs with a shared progress counter.

use crate::domain::constants::RESERVED_CORES;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// `0` means auto: available parallelism minus the reserved cores, at least 1.
pub fn resolve_threads(requested: usize) -> usize {
    if requested != 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .saturating_sub(RESERVED_CORES)
        .max(1)
}

/// Completed-item counter mirrored into a progress bar on stderr.
pub struct Progress {
    completed: AtomicUsize,
    bar: ProgressBar,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len} [{elapsed_precise}<{eta}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self {
            completed: AtomicUsize::new(0),
            bar,
        }
    }

    pub fn tick(&self) {
        let done = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        self.bar.set_position(done as u64);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Runs `job` once per item on `threads` workers.
///
/// With one worker items run in order on the calling thread. With more, a
/// dedicated pool of exactly `threads` workers takes items in any order. The
/// first `Err` stops the batch; per-item failures that should not stop it
/// must be returned as `Ok` values.
pub fn dispatch<T, R, F>(items: &[T], threads: usize, job: F) -> anyhow::Result<Vec<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> anyhow::Result<R> + Sync,
{
    let progress = Progress::new(items.len());
    let run = |item: &T| {
        let r = job(item);
        progress.tick();
        r
    };

    let results = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("rulestat-worker-{i}"))
            .build()?;
        pool.install(|| items.par_iter().map(run).collect::<anyhow::Result<Vec<R>>>())
    } else {
        items.iter().map(run).collect::<anyhow::Result<Vec<R>>>()
    };

    progress.finish();
    tracing::debug!(completed = progress.completed(), threads, "dispatch finished");
    results
}
