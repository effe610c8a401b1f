//! Update breed command
//!
//! Partially updates an existing breed. Only the fields that are provided
//! will be updated; others remain unchanged. `image_url` can also be
//! cleared by sending `null`.

use breeds_common::{Breed, BreedPatch, RangePatch};
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    RangeInput, HEIGHT_MAX_INVALID, HEIGHT_MIN_INVALID, IMAGE_URL_INVALID, WEIGHT_MAX_INVALID,
    WEIGHT_MIN_INVALID,
};
use crate::db::{BreedStore, DbError};
use crate::features::shared::validation::{
    has_length, is_valid_height, is_valid_url, is_valid_weight, FieldErrors,
};

const NAME_INVALID: &str = "Name must be 1-100 characters";
const BREED_GROUP_INVALID: &str = "Breed group must be 1-50 characters";
const TEMPERAMENT_INVALID: &str = "Temperament must be 1-200 characters";
const LIFE_SPAN_INVALID: &str = "Life span must be 1-50 characters";
const DESCRIPTION_INVALID: &str = "Description must be 10-1000 characters";

/// Command to update an existing breed
///
/// The `id` comes from the path, not the body.
///
/// # Examples
///
/// ```rust,ignore
/// use breeds_server::features::breeds::commands::UpdateBreedCommand;
///
/// let command = UpdateBreedCommand {
///     id: 1,
///     temperament: Some("Calm, Loyal".to_string()),
///     image_url: Some(None), // clear the image
///     ..UpdateBreedCommand::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBreedCommand {
    #[serde(skip)]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life_span: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<RangeInput<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<RangeInput<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Omitted: keep. `null`: clear. String: replace.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
}

/// Wraps any present value, `null` included, in `Some`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Errors that can occur when updating a breed
#[derive(Debug, thiserror::Error)]
pub enum UpdateBreedError {
    #[error("{0}")]
    Validation(#[from] FieldErrors),

    #[error("Height min cannot be greater than height max")]
    HeightRange,

    #[error("Weight min cannot be greater than weight max")]
    WeightRange,

    #[error("Breed {0} not found")]
    NotFound(i64),

    #[error("Breed with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(DbError),
}

impl From<DbError> for UpdateBreedError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateName(name) => Self::DuplicateName(name),
            other => Self::Database(other),
        }
    }
}

impl UpdateBreedCommand {
    /// Validates the provided fields and produces the patch to apply
    ///
    /// A range is checked for order here only when both of its bounds are
    /// given; [`handle`] checks half-given ranges against the stored record.
    pub fn validate(&self) -> Result<BreedPatch, UpdateBreedError> {
        let height = self.height_cm.unwrap_or_default();
        let weight = self.weight_kg.unwrap_or_default();

        let mut errors = FieldErrors::default();
        errors.check(text_ok(&self.name, 1, 100), NAME_INVALID);
        errors.check(text_ok(&self.breed_group, 1, 50), BREED_GROUP_INVALID);
        errors.check(text_ok(&self.temperament, 1, 200), TEMPERAMENT_INVALID);
        errors.check(text_ok(&self.life_span, 1, 50), LIFE_SPAN_INVALID);
        errors.check(height.min.map_or(true, is_valid_height), HEIGHT_MIN_INVALID);
        errors.check(height.max.map_or(true, is_valid_height), HEIGHT_MAX_INVALID);
        errors.check(weight.min.map_or(true, is_valid_weight), WEIGHT_MIN_INVALID);
        errors.check(weight.max.map_or(true, is_valid_weight), WEIGHT_MAX_INVALID);
        errors.check(text_ok(&self.description, 10, 1000), DESCRIPTION_INVALID);
        if let Some(Some(ref url)) = self.image_url {
            errors.check(is_valid_url(url), IMAGE_URL_INVALID);
        }
        errors.into_result()?;

        let patch = BreedPatch {
            name: self.name.clone(),
            breed_group: self.breed_group.clone(),
            temperament: self.temperament.clone(),
            life_span: self.life_span.clone(),
            height_cm: RangePatch {
                min: height.min,
                max: height.max,
            },
            weight_kg: RangePatch {
                min: weight.min,
                max: weight.max,
            },
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        };

        if patch.height_cm.both().is_some_and(|r| !r.is_ordered()) {
            return Err(UpdateBreedError::HeightRange);
        }
        if patch.weight_kg.both().is_some_and(|r| !r.is_ordered()) {
            return Err(UpdateBreedError::WeightRange);
        }

        Ok(patch)
    }
}

/// Absent values pass; present ones must fit
fn text_ok(value: &Option<String>, min: usize, max: usize) -> bool {
    value.as_deref().map_or(true, |v| has_length(v, min, max))
}

fn is_half(patch: &RangePatch<impl Copy>) -> bool {
    patch.min.is_some() != patch.max.is_some()
}

/// Handler function for updating breeds
///
/// # Errors
///
/// - Validation errors if any provided field is invalid
/// - `HeightRange` / `WeightRange` if the resulting ranges would be inverted
/// - `NotFound` if no breed has the id
/// - `DuplicateName` if the new name is taken by another breed
#[tracing::instrument(skip(store, command), fields(id = command.id))]
pub async fn handle(
    store: BreedStore,
    command: UpdateBreedCommand,
) -> Result<Breed, UpdateBreedError> {
    let patch = command.validate()?;

    if is_half(&patch.height_cm) || is_half(&patch.weight_kg) {
        let current = store
            .get_by_id(command.id)
            .await?
            .ok_or(UpdateBreedError::NotFound(command.id))?;
        let merged = patch.apply_to(&current);

        if !merged.height_cm.is_ordered() {
            return Err(UpdateBreedError::HeightRange);
        }
        if !merged.weight_kg.is_ordered() {
            return Err(UpdateBreedError::WeightRange);
        }
    }

    tracing::info!("Updating breed");

    store
        .update(command.id, &patch)
        .await?
        .ok_or(UpdateBreedError::NotFound(command.id))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use breeds_common::Range;

    fn parse(body: &str) -> UpdateBreedCommand {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_image_url_is_tri_state() {
        assert_eq!(parse("{}").image_url, None);
        assert_eq!(parse(r#"{"image_url": null}"#).image_url, Some(None));
        assert_eq!(
            parse(r#"{"image_url": "https://example.com/x.png"}"#).image_url,
            Some(Some("https://example.com/x.png".to_string()))
        );
    }

    #[test]
    fn test_id_is_not_read_from_body() {
        assert_eq!(parse(r#"{"id": 7, "name": "Pug"}"#).id, 0);
    }

    #[test]
    fn test_empty_command_is_valid() {
        let patch = UpdateBreedCommand::default().validate().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_provided_fields_are_checked() {
        let command = parse(
            r#"{"name": "", "height_cm": {"max": 500}, "description": "short", "image_url": "nope"}"#,
        );
        match command.validate().unwrap_err() {
            UpdateBreedError::Validation(errors) => assert_eq!(
                errors.to_string(),
                "Name must be 1-100 characters, Height max must be between 1-200 cm, \
                 Description must be 10-1000 characters, Image URL must be a valid URL"
            ),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_clearing_image_url_is_valid() {
        let patch = parse(r#"{"image_url": null}"#).validate().unwrap();
        assert_eq!(patch.image_url, Some(None));
    }

    #[test]
    fn test_full_ranges_are_ordered() {
        let err = parse(r#"{"height_cm": {"min": 70, "max": 60}}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, UpdateBreedError::HeightRange));

        let err = parse(r#"{"weight_kg": {"min": 40, "max": 30}}"#)
            .validate()
            .unwrap_err();
        assert!(matches!(err, UpdateBreedError::WeightRange));
    }

    #[test]
    fn test_half_range_passes_validation() {
        let patch = parse(r#"{"height_cm": {"min": 70}}"#).validate().unwrap();
        assert_eq!(patch.height_cm.min, Some(70));
        assert_eq!(patch.height_cm.max, None);
        assert!(is_half(&patch.height_cm));
        assert!(!is_half(&patch.weight_kg));
        assert_eq!(
            patch.height_cm.apply_to(Range::new(55, 61)),
            Range::new(70, 61)
        );
    }
}
