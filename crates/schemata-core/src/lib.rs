//! Schemata Core - reference resolution and example synthesis for JSON-Schema-like documents
//!
//! This crate provides the read/query side used by documentation generators:
//! - **Document model**: a normalized schema tree (`type` strings become
//!   one-element arrays, `example` payloads are left alone) with top-level
//!   access, shallow merge and `href` lookup
//! - **Reference resolution**: `$ref` pointer chains with sibling override
//!   merging and cycle detection
//! - **Example synthesis**: representative values built from `example`,
//!   `properties`, `items`, `allOf`, `anyOf` and `oneOf`, memoized per
//!   definition
//! - **Serialization**: pretty JSON and block YAML output
//!
//! ## Quick Start
//!
//! ```rust
//! use schemata_core::Schema;
//! use serde_json::json;
//!
//! let mut schema = Schema::from_value(json!({
//!     "definitions": {
//!         "app": {
//!             "type": "object",
//!             "properties": {
//!                 "name": {"type": "string", "example": "example-app"}
//!             }
//!         }
//!     },
//!     "links": [{"rel": "self", "href": "https://api.example.com"}]
//! }))?;
//!
//! assert_eq!(schema.href(), Some("https://api.example.com"));
//! assert_eq!(
//!     schema.example_for_definition("app")?,
//!     Some(json!({"name": "example-app"}))
//! );
//! print!("{}", schema.to_json()?);
//! # Ok::<(), schemata_core::SchemaError>(())
//! ```
//!
//! ## Threading
//!
//! Definition examples are memoized inside the [`Schema`]; filling the cache
//! needs `&mut Schema`. Wrap the schema in a `Mutex` to share it across threads.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod normalize;
pub mod resolver;
pub mod synthesis;

/// A node of a schema document
pub type SchemaNode = serde_json::Value;

pub use cache::{CacheStats, ExampleCache};
pub use config::SchemaConfig;
pub use document::{merge_maps, Schema};
pub use error::{SchemaError, SchemaResult};
pub use format::{parse_document, parse_value, Format};
pub use normalize::normalize;
pub use resolver::{pointer_fragments, Dereferenced};
pub use synthesis::select_alternative;
