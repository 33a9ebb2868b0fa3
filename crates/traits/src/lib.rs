pub mod loader;

pub use async_trait::async_trait;
pub use loader::{Loader, LoaderError, NullLoader};
