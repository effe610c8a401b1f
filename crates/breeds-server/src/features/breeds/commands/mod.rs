//! Breed commands (write operations)
//!
//! Each command is a plain data struct with a `validate` method and a
//! standalone `handle` function that talks to the [`BreedStore`].
//!
//! [`BreedStore`]: crate::db::BreedStore

pub mod create;
pub mod delete;
pub mod update;

use serde::{Deserialize, Serialize};

pub use create::{CreateBreedCommand, CreateBreedError};
pub use delete::{DeleteBreedCommand, DeleteBreedError};
pub use update::{UpdateBreedCommand, UpdateBreedError};

pub(crate) const HEIGHT_MIN_INVALID: &str = "Height min must be between 1-200 cm";
pub(crate) const HEIGHT_MAX_INVALID: &str = "Height max must be between 1-200 cm";
pub(crate) const WEIGHT_MIN_INVALID: &str = "Weight min must be between 0.1-200 kg";
pub(crate) const WEIGHT_MAX_INVALID: &str = "Weight max must be between 0.1-200 kg";
pub(crate) const IMAGE_URL_INVALID: &str = "Image URL must be a valid URL";

/// `{min, max}` as sent by clients; either side may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeInput<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<T>,
}

impl<T> RangeInput<T> {
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}
