//! PoW generation (multi-threaded CPU).

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rayon::ThreadPoolBuilder;

use nano_types::BlockHash;
use nano_utils::format_duration;

use crate::hasher::{Blake2bWorkHasher, WorkHasher};
use crate::{Difficulty, WorkError, WorkNonce};

/// Nonces tried per lane between checks of the stop flag and deadline.
const BATCH_SIZE: u64 = 4096;

/// Searches the nonce space for work meeting a difficulty.
///
/// Every call to [`generate`](Self::generate) builds its own rayon pool and
/// broadcasts one search lane to each of its workers, so concurrent searches
/// never queue behind each other and each honours its own deadline. Every
/// lane starts at an independent random nonce and walks upward, so lanes do
/// not share ranges and repeated calls return different nonces. The first
/// lane to find a valid nonce stops the others.
pub struct WorkGenerator<H = Blake2bWorkHasher> {
    hasher: H,
    threads: usize,
}

impl WorkGenerator {
    /// Generator with one lane per available core.
    pub fn new() -> Self {
        Self::with_threads(0)
    }

    /// Generator with `threads` lanes per search; `0` means one per
    /// available core.
    pub fn with_threads(threads: usize) -> Self {
        Self::with_hasher(Blake2bWorkHasher, threads)
    }
}

impl Default for WorkGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: WorkHasher> WorkGenerator<H> {
    /// Generator using a custom hashing backend.
    pub fn with_hasher(hasher: H, threads: usize) -> Self {
        Self { hasher, threads }
    }

    /// Number of concurrent search lanes.
    pub fn lanes(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            thread::available_parallelism().map_or(1, NonZeroUsize::get)
        }
    }

    /// Search for a nonce whose work value meets `difficulty`.
    ///
    /// `Ok(None)` means `timeout` elapsed first; without a timeout the call
    /// blocks until a nonce is found. Fails only if the search workers
    /// cannot be started.
    pub fn generate(
        &self,
        block_hash: &BlockHash,
        difficulty: Difficulty,
        timeout: Option<Duration>,
    ) -> Result<Option<WorkNonce>, WorkError> {
        let started = Instant::now();
        // A deadline too far out to represent is the same as none.
        let deadline = timeout.and_then(|t| started.checked_add(t));
        let lanes = self.lanes();

        let pool = ThreadPoolBuilder::new()
            .num_threads(lanes)
            .thread_name(|i| format!("work-{i}"))
            .build()
            .map_err(|e| WorkError::ThreadPool(e.to_string()))?;

        tracing::debug!(%block_hash, %difficulty, lanes, ?timeout, "work search started");

        let found = AtomicBool::new(false);
        let solution = AtomicU64::new(0);
        let attempts = AtomicU64::new(0);

        pool.broadcast(|_| {
            self.search_lane(block_hash, difficulty, deadline, &found, &solution, &attempts)
        });

        let elapsed = format_duration(started.elapsed());
        let attempts = attempts.load(Ordering::Relaxed);
        if found.load(Ordering::Acquire) {
            let nonce = WorkNonce(solution.load(Ordering::Acquire));
            tracing::info!(%block_hash, %nonce, %elapsed, attempts, "work solved");
            Ok(Some(nonce))
        } else {
            tracing::warn!(%block_hash, %difficulty, %elapsed, attempts, "work search timed out");
            Ok(None)
        }
    }

    fn search_lane(
        &self,
        block_hash: &BlockHash,
        difficulty: Difficulty,
        deadline: Option<Instant>,
        found: &AtomicBool,
        solution: &AtomicU64,
        attempts: &AtomicU64,
    ) {
        let mut nonce = rand::random::<u64>();
        loop {
            if found.load(Ordering::Relaxed) {
                return;
            }

            for _ in 0..BATCH_SIZE {
                let value = self.hasher.work_value(block_hash, WorkNonce(nonce));
                if difficulty.is_met_by(value) {
                    // Only the first lane to flip the flag publishes its nonce.
                    if found
                        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                    {
                        solution.store(nonce, Ordering::Release);
                    }
                    return;
                }
                nonce = nonce.wrapping_add(1);
            }
            attempts.fetch_add(BATCH_SIZE, Ordering::Relaxed);

            if deadline.is_some_and(|d| Instant::now() >= d) {
                return;
            }
        }
    }
}
