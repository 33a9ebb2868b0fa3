//! Server-side HTML page assembly.
//!
//! A page is described as loosely-typed JSON, normalized into a [`Document`],
//! its assets resolved by a [`LoaderPipeline`], optionally given client state
//! with [`get_inject_copy`], and finally rendered with [`render_to_string`].
//!
//! ```ignore
//! use epii_render::{Document, FileLoader, FileLoaderOptions, LoaderPipeline};
//! use epii_render::{get_inject_copy, render_to_string};
//! use serde_json::json;
//!
//! let mut document = Document::from_value(&json!({
//!     "head": { "styles": { "src": "app.css", "inline": true }, "title": "Home" },
//!     "body": { "scripts": "app.js" }
//! }));
//!
//! let pipeline = LoaderPipeline::builder()
//!     .with_loader(FileLoader::new(FileLoaderOptions::new("public"))?)
//!     .build();
//! pipeline.apply(&mut document).await;
//!
//! let page = get_inject_copy(&document, Some(&json!({ "user": "epii" })));
//! let html = render_to_string(&page);
//! ```

pub mod error;
pub mod inject;
pub mod pipeline;
pub mod render;

pub use error::EpiiError;
pub use inject::{get_inject_copy, inject_script, state_literal};
pub use pipeline::{LoaderPipeline, LoaderPipelineBuilder, PipelineReport, apply_loaders};
pub use render::render_to_string;

pub use epii_resource::{FileLoader, FileLoaderOptions, MemoryLoader};
pub use epii_traits::{Loader, LoaderError, NullLoader, async_trait};
pub use epii_types::{Asset, Body, Document, DocumentError, Head, Meta, content_type, markup};
