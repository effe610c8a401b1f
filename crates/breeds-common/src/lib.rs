//! Dog Breeds Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared domain types and logging setup for the Dog Breeds workspace.
//!
//! # Overview
//!
//! - **Types**: the `Breed` record, its insert and patch shapes, and the
//!   measurement ranges it carries
//! - **Logging**: tracing subscriber configuration used by every binary
//!
//! # Example
//!
//! ```
//! use breeds_common::types::{BreedPatch, Range};
//!
//! let patch = BreedPatch {
//!     temperament: Some("Calm, Loyal".to_string()),
//!     ..BreedPatch::default()
//! };
//! assert!(!patch.is_empty());
//! assert!(Range::new(55, 61).is_ordered());
//! ```

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{Breed, BreedPatch, NewBreed, Range, RangePatch};
