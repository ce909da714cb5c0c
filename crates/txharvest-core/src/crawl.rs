use std::collections::{HashSet, VecDeque};

use tracing::{debug, info, warn};

use crate::extract::referenced_hashes;
use crate::source::TxSource;
use crate::store::TxStore;
use crate::types::{TxHash, TxRecord};

// ==============================================================================
// Crawler
// ==============================================================================

/// Worklist walk over the transaction reference graph.
///
/// Starting from one seed document, every directly or transitively
/// referenced hash is fetched exactly once and the returned document is
/// appended to the store. Frontier and visited state are owned by the
/// instance, so independent crawls never share bookkeeping.
///
/// Pop order is an implementation detail (currently FIFO); correctness
/// depends only on the visited-set discipline, not on visit order.
pub struct Crawler {
    frontier: VecDeque<TxHash>,
    /// Frontier membership, kept in lockstep with the queue so the frontier
    /// behaves as a set.
    pending: HashSet<TxHash>,
    visited: HashSet<TxHash>,
}

/// Counters summarizing one completed crawl. `fetched + fetch_failures`
/// equals the number of lookup calls made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    pub fetched: usize,
    pub fetch_failures: usize,
    pub persisted: usize,
    pub store_failures: usize,
}

impl Crawler {
    /// Seed the frontier from the references of an initial document.
    ///
    /// The seed's own hash (when the document carries one) is marked visited
    /// up front: the caller already holds that document, and back-references
    /// to it from fetched transactions must not trigger a fetch. The seed
    /// itself is never appended to the store. A seed without references
    /// yields an empty frontier and a crawl that completes immediately.
    pub fn seeded(seed: &TxRecord) -> Self {
        let mut crawler = Self {
            frontier: VecDeque::new(),
            pending: HashSet::new(),
            visited: HashSet::new(),
        };
        if let Some(hash) = &seed.hash {
            crawler.visited.insert(hash.clone());
        }
        for hash in referenced_hashes(seed) {
            crawler.enqueue(hash);
        }
        crawler
    }

    /// Drain the frontier, fetching each pending hash once and appending the
    /// returned document to the store.
    ///
    /// Per-hash failures are logged and counted but never abort the walk: a
    /// hash whose fetch or append fails is still marked visited and is not
    /// retried within this run.
    pub async fn run(&mut self, source: &dyn TxSource, store: &mut dyn TxStore) -> CrawlReport {
        let mut report = CrawlReport::default();

        while let Some(hash) = self.frontier.pop_front() {
            self.pending.remove(&hash);
            // Re-check: a fetched document may have re-referenced this hash
            // after it became visited but while it was still queued.
            if self.visited.contains(&hash) {
                continue;
            }

            match source.fetch(&hash).await {
                Ok(record) => {
                    report.fetched += 1;
                    match store.append(&record) {
                        Ok(()) => report.persisted += 1,
                        Err(e) => {
                            warn!(tx.hash = %hash, error = %e, "failed to persist transaction");
                            report.store_failures += 1;
                        }
                    }
                    for discovered in referenced_hashes(&record) {
                        self.enqueue(discovered);
                    }
                }
                Err(e) => {
                    warn!(tx.hash = %hash, error = %e, "fetch failed, skipping hash");
                    report.fetch_failures += 1;
                }
            }

            self.visited.insert(hash);
            debug!(
                frontier = self.frontier.len(),
                visited = self.visited.len(),
                "crawl step complete"
            );
        }

        info!(
            fetched = report.fetched,
            fetch_failures = report.fetch_failures,
            persisted = report.persisted,
            store_failures = report.store_failures,
            "crawl finished"
        );
        report
    }

    /// Hashes processed so far, including the seed's own hash when it was
    /// known at seeding time.
    pub fn visited(&self) -> &HashSet<TxHash> {
        &self.visited
    }

    fn enqueue(&mut self, hash: TxHash) {
        if self.visited.contains(&hash) || self.pending.contains(&hash) {
            return;
        }
        self.pending.insert(hash.clone());
        self.frontier.push_back(hash);
    }
}
