//! # Batch Renderer
//!
//! Renders a seed range on a fixed pool of worker threads.
//!
//! ```text
//! ┌──────────┐  seeds   ┌──────────┐
//! │ producer │─────────>│ worker 0 │──> <seed>.svg, <seed>.json
//! └──────────┘ bounded  │ worker 1 │──> ...
//!                       │ worker N │
//!                       └────┬─────┘
//!                            └──> Mutex<BatchReport>
//! ```
//!
//! Each worker keeps a local report and merges it once when the queue
//! drains, so the lock is taken once per worker.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam_channel::{bounded, Receiver};
use fairisle_procedural::{Artwork, Seed};
use parking_lot::Mutex;
use serde::Serialize;

use crate::config::{BatchConfig, FairIsleConfig, MetadataConfig};
use crate::error::{FairIsleError, FairIsleResult};
use crate::metadata::TokenMetadata;

/// Jobs queued per worker before the producer blocks.
const QUEUE_DEPTH_PER_WORKER: usize = 8;

/// Inclusive range of seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRange {
    from: u64,
    to: u64,
}

impl SeedRange {
    /// Creates `from..=to`.
    ///
    /// # Errors
    ///
    /// Returns [`FairIsleError::EmptyRange`] if `from > to`.
    pub fn new(from: u64, to: u64) -> FairIsleResult<Self> {
        if from > to {
            return Err(FairIsleError::EmptyRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// First seed.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> u64 {
        self.from
    }

    /// Last seed.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> u64 {
        self.to
    }

    /// Number of seeds.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.to - self.from + 1
    }

    /// Always false; ranges hold at least one seed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the seeds in order.
    pub fn iter(&self) -> impl Iterator<Item = u64> {
        self.from..=self.to
    }
}

/// Aggregate statistics over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Seeds processed.
    pub count: u64,
    /// Seeds with the rare palette.
    pub rare: u64,
    /// Seeds per palette name.
    pub palettes: BTreeMap<&'static str, u64>,
    /// Seeds whose center band is the giant snowflake.
    pub giant_centers: u64,
    /// Files written to disk.
    pub files_written: u64,
}

impl BatchReport {
    fn record(&mut self, artwork: &Artwork) {
        self.count += 1;
        if artwork.selection.is_rare {
            self.rare += 1;
        }
        *self.palettes.entry(artwork.selection.palette.name).or_insert(0) += 1;
        if artwork.sequence.has_giant_center() {
            self.giant_centers += 1;
        }
    }

    /// Folds another report into this one.
    pub fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.rare += other.rare;
        self.giant_centers += other.giant_centers;
        self.files_written += other.files_written;
        for (name, n) in &other.palettes {
            *self.palettes.entry(*name).or_insert(0) += n;
        }
    }

    /// Fraction of seeds with the rare palette.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rare_rate(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.rare as f64 / self.count as f64
    }

    /// Fraction of seeds with a giant snowflake center.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn giant_rate(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.giant_centers as f64 / self.count as f64
    }
}

/// What each worker does with a composed artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// Statistics only.
    None,
    /// Write SVG and, if configured, metadata.
    Files,
}

/// Parallel renderer over seed ranges.
#[derive(Debug, Clone)]
pub struct BatchRenderer {
    batch: BatchConfig,
    metadata: MetadataConfig,
}

impl BatchRenderer {
    /// Creates a renderer from the service configuration.
    #[must_use]
    pub fn new(config: &FairIsleConfig) -> Self {
        Self {
            batch: config.batch.clone(),
            metadata: config.metadata.clone(),
        }
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.batch.output_dir
    }

    /// Path of the SVG written for a seed.
    #[must_use]
    pub fn svg_path(&self, seed: u64) -> PathBuf {
        self.batch.output_dir.join(format!("{seed}.svg"))
    }

    /// Path of the metadata written for a seed.
    #[must_use]
    pub fn metadata_path(&self, seed: u64) -> PathBuf {
        self.batch.output_dir.join(format!("{seed}.json"))
    }

    /// Renders every seed in the range to the output directory.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization error hit by any worker.
    pub fn render(&self, range: SeedRange) -> FairIsleResult<BatchReport> {
        std::fs::create_dir_all(&self.batch.output_dir)
            .map_err(|e| FairIsleError::io(&self.batch.output_dir, e))?;
        self.run(range, Output::Files)
    }

    /// Composes every seed in the range and reports statistics without
    /// rendering or writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`FairIsleError::WorkerFailed`] if a worker thread dies.
    pub fn stats(&self, range: SeedRange) -> FairIsleResult<BatchReport> {
        self.run(range, Output::None)
    }

    fn run(&self, range: SeedRange, output: Output) -> FairIsleResult<BatchReport> {
        let workers = self.batch.worker_count();
        let (tx, rx) = bounded::<u64>(workers * QUEUE_DEPTH_PER_WORKER);
        let report = Mutex::new(BatchReport::default());
        let failed = AtomicBool::new(false);

        tracing::info!(
            "batch {}..={} ({} seeds) on {} workers",
            range.first(),
            range.last(),
            range.len(),
            workers
        );

        let results: Vec<FairIsleResult<()>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|id| {
                    let rx = rx.clone();
                    let report = &report;
                    let failed = &failed;
                    scope.spawn(move || {
                        let result = self.worker_loop(id, &rx, output, report);
                        if result.is_err() {
                            failed.store(true, Ordering::Relaxed);
                        }
                        result
                    })
                })
                .collect();
            drop(rx);

            for seed in range.iter() {
                if failed.load(Ordering::Relaxed) || tx.send(seed).is_err() {
                    break;
                }
            }
            drop(tx);

            handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .unwrap_or_else(|_| Err(FairIsleError::WorkerFailed("worker panicked".to_owned())))
                })
                .collect()
        });

        for result in results {
            result?;
        }

        let report = report.into_inner();
        tracing::info!(
            "batch done: {} seeds, {} rare, {} giant centers, {} files",
            report.count,
            report.rare,
            report.giant_centers,
            report.files_written
        );
        Ok(report)
    }

    fn worker_loop(
        &self,
        id: usize,
        rx: &Receiver<u64>,
        output: Output,
        shared: &Mutex<BatchReport>,
    ) -> FairIsleResult<()> {
        let mut local = BatchReport::default();

        for seed in rx.iter() {
            let artwork = Artwork::compose(Seed::new(seed));
            local.record(&artwork);
            if output == Output::Files {
                local.files_written += self.write_files(seed, &artwork)?;
            }
        }

        tracing::debug!("worker {} finished {} seeds", id, local.count);
        shared.lock().merge(&local);
        Ok(())
    }

    fn write_files(&self, seed: u64, artwork: &Artwork) -> FairIsleResult<u64> {
        let result = artwork.render();

        let svg_path = self.svg_path(seed);
        std::fs::write(&svg_path, &result.image).map_err(|e| FairIsleError::io(&svg_path, e))?;

        if !self.batch.write_metadata {
            return Ok(1);
        }

        let json = TokenMetadata::from_render(seed, &result, &self.metadata).to_json()?;
        let json_path = self.metadata_path(seed);
        std::fs::write(&json_path, json).map_err(|e| FairIsleError::io(&json_path, e))?;
        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(SeedRange::new(5, 4).is_err());
        let range = SeedRange::new(4, 4).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_stats_counts_every_seed() {
        let renderer = BatchRenderer::new(&FairIsleConfig::default());
        let report = renderer.stats(SeedRange::new(0, 199).unwrap()).unwrap();

        assert_eq!(report.count, 200);
        assert_eq!(report.palettes.values().sum::<u64>(), 200);
        assert_eq!(report.files_written, 0);
        // 0..=3 are grandfathered
        assert!(report.rare >= 4);
    }

    #[test]
    fn test_stats_independent_of_worker_count() {
        let mut config = FairIsleConfig::default();
        let range = SeedRange::new(100, 400).unwrap();

        config.batch.workers = 1;
        let single = BatchRenderer::new(&config).stats(range).unwrap();
        config.batch.workers = 7;
        let many = BatchRenderer::new(&config).stats(range).unwrap();

        assert_eq!(single, many);
    }

    #[test]
    fn test_merge() {
        let mut a = BatchReport {
            count: 2,
            palettes: BTreeMap::from([("Moss", 2)]),
            ..BatchReport::default()
        };
        let b = BatchReport {
            count: 3,
            rare: 1,
            palettes: BTreeMap::from([("Moss", 1), ("Nordic Rainbow", 1)]),
            ..BatchReport::default()
        };

        a.merge(&b);
        assert_eq!(a.count, 5);
        assert_eq!(a.rare, 1);
        assert_eq!(a.palettes["Moss"], 3);
        assert!((a.rare_rate() - 0.2).abs() < f64::EPSILON);
    }
}
