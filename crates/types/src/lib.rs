//! Document model for epii-render.
//!
//! A page is described with loosely-typed JSON and normalized into a
//! [`Document`] whose [`Asset`]s are later resolved by loaders.
//!
//! ```ignore
//! use epii_types::Document;
//! use serde_json::json;
//!
//! let doc = Document::from_value(&json!({
//!     "head": { "styles": "app.css", "title": "Home" },
//!     "body": { "content": { "raw": "<div id=\"app\"></div>" } }
//! }));
//! assert_eq!(doc.head.unwrap().styles[0].content_type, "text/css");
//! ```

pub mod asset;
pub mod content_type;
pub mod document;
pub mod error;
mod loose;
pub mod markup;
pub mod meta;

pub use asset::Asset;
pub use document::{Body, Document, Head};
pub use error::DocumentError;
pub use loose::is_truthy;
pub use meta::Meta;
