//! Asset loader pipeline.
//!
//! - [`LoaderPipeline`]: runs an ordered list of loaders over every asset of a
//!   document
//! - [`LoaderPipelineBuilder`]: fluent construction, including the fallback
//! - [`PipelineReport`]: what a single run did
//!
//! # Ordering
//!
//! ```text
//! asset 1: loader A -> loader B -> loaded = true
//! asset 2: (no match) -> fallback          (stays unloaded)
//! asset 3: loader B -> loaded = true
//! ```
//!
//! Chains of different assets interleave freely; loaders of one asset run
//! strictly in registration order. All chains are polled on the caller's
//! task, nothing is spawned.
//!
//! # Example
//!
//! ```ignore
//! use epii_render::{Document, FileLoader, FileLoaderOptions, LoaderPipeline};
//!
//! let pipeline = LoaderPipeline::builder()
//!     .with_loader(FileLoader::new(FileLoaderOptions::new("public"))?)
//!     .build();
//!
//! let mut document = Document::from_value(&page);
//! pipeline.apply(&mut document).await;
//! ```

mod builder;

pub use builder::LoaderPipelineBuilder;

use epii_traits::{Loader, NullLoader};
use epii_types::{Asset, Document};
use futures::future::join_all;
use log::{debug, trace};
use std::sync::Arc;
use std::time::Instant;

/// Summary of one [`LoaderPipeline::apply`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Assets that went through at least one matching loader.
    pub processed: usize,
    /// Assets that were already loaded.
    pub skipped: usize,
    /// Assets no loader matched; the fallback ran on them.
    pub unmatched: usize,
}

impl PipelineReport {
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.unmatched
    }
}

enum AssetOutcome {
    Processed,
    Unmatched,
}

/// An ordered set of loaders plus the fallback used when none of them match.
#[derive(Debug, Clone)]
pub struct LoaderPipeline {
    loaders: Vec<Arc<dyn Loader>>,
    fallback: Arc<dyn Loader>,
}

impl Default for LoaderPipeline {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LoaderPipeline {
    /// Creates a pipeline over `loaders` with a [`NullLoader`] fallback.
    pub fn new(loaders: Vec<Arc<dyn Loader>>) -> Self {
        Self {
            loaders,
            fallback: Arc::new(NullLoader::new()),
        }
    }

    pub fn builder() -> LoaderPipelineBuilder {
        LoaderPipelineBuilder::new()
    }

    pub fn loaders(&self) -> &[Arc<dyn Loader>] {
        &self.loaders
    }

    pub fn fallback(&self) -> &Arc<dyn Loader> {
        &self.fallback
    }

    /// Resolves every asset of `document` that is not loaded yet.
    ///
    /// Completes once every asset chain has settled. Loaders have no error
    /// channel, so one failing asset never affects another. Running the same
    /// pipeline twice only revisits assets that no loader matched.
    pub async fn apply(&self, document: &mut Document) -> PipelineReport {
        let start = Instant::now();
        let mut report = PipelineReport::default();

        let mut chains = Vec::new();
        for asset in document.assets_mut() {
            if asset.loaded {
                report.skipped += 1;
                continue;
            }
            chains.push(self.process_asset(asset));
        }

        for outcome in join_all(chains).await {
            match outcome {
                AssetOutcome::Processed => report.processed += 1,
                AssetOutcome::Unmatched => report.unmatched += 1,
            }
        }

        debug!(
            "[PIPELINE] '{}': {} processed, {} skipped, {} unmatched in {:?}",
            document.name,
            report.processed,
            report.skipped,
            report.unmatched,
            start.elapsed()
        );
        report
    }

    async fn process_asset(&self, asset: &mut Asset) -> AssetOutcome {
        let candidate: &Asset = asset;
        let matched: Vec<&Arc<dyn Loader>> = self
            .loaders
            .iter()
            .filter(|loader| loader.match_asset(candidate))
            .collect();

        if matched.is_empty() {
            trace!(
                "[PIPELINE] no loader for '{}', using {}",
                asset.src,
                self.fallback.name()
            );
            self.fallback.try_process(asset).await;
            return AssetOutcome::Unmatched;
        }

        for loader in matched {
            trace!("[PIPELINE] {} -> '{}'", loader.name(), asset.src);
            loader.try_process(asset).await;
        }
        asset.loaded = true;
        AssetOutcome::Processed
    }
}

/// Runs `loaders` over `document` with the default [`NullLoader`] fallback.
pub async fn apply_loaders(document: &mut Document, loaders: &[Arc<dyn Loader>]) -> PipelineReport {
    LoaderPipeline::new(loaders.to_vec()).apply(document).await
}
