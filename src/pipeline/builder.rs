// src/pipeline/builder.rs
use super::LoaderPipeline;
use epii_traits::{Loader, NullLoader};
use std::sync::Arc;

/// A builder for creating a [`LoaderPipeline`].
///
/// Loaders run in the order they are added. Without an explicit fallback the
/// pipeline uses a [`NullLoader`].
#[derive(Debug, Default)]
pub struct LoaderPipelineBuilder {
    loaders: Vec<Arc<dyn Loader>>,
    fallback: Option<Arc<dyn Loader>>,
}

impl LoaderPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a loader.
    pub fn with_loader<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.loaders.push(Arc::new(loader));
        self
    }

    /// Appends a loader that is also held elsewhere (e.g. a shared store).
    pub fn with_shared_loader(mut self, loader: Arc<dyn Loader>) -> Self {
        self.loaders.push(loader);
        self
    }

    /// Appends several loaders, keeping their order.
    pub fn with_loaders<I>(mut self, loaders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Loader>>,
    {
        self.loaders.extend(loaders);
        self
    }

    /// Replaces the loader used for assets nothing else matches.
    pub fn with_fallback<L: Loader + 'static>(mut self, fallback: L) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    pub fn build(self) -> LoaderPipeline {
        let fallback = self.fallback.unwrap_or_else(|| Arc::new(NullLoader::new()));
        log::debug!(
            "Building loader pipeline: [{}] with fallback {}",
            self.loaders.iter().map(|l| l.name()).collect::<Vec<_>>().join(", "),
            fallback.name()
        );
        LoaderPipeline {
            loaders: self.loaders,
            fallback,
        }
    }
}
