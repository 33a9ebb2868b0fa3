//! Loaders for the epii-render asset pipeline.
//!
//! This crate provides implementations of the `Loader` trait from
//! epii-traits.
//!
//! ## Available Loaders
//!
//! - [`FileLoader`]: Reads inline assets from disk and prefixes referenced ones
//! - [`MemoryLoader`]: Serves inline assets from a pre-populated store
//!
//! ## Re-exports
//!
//! For convenience, the fallback loader from epii-traits is re-exported:
//! - [`NullLoader`]: Placeholder content for assets nobody claimed

mod filesystem;
mod memory;

pub use filesystem::{FileLoader, FileLoaderOptions};
pub use memory::MemoryLoader;

pub use epii_traits::NullLoader;
