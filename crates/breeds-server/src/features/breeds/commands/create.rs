//! Create breed command
//!
//! Every field of the request body is optional at the serde level so that a
//! missing field is reported with its own validation message instead of a
//! deserializer error.

use breeds_common::{Breed, NewBreed, Range};
use serde::{Deserialize, Serialize};

use super::{
    RangeInput, HEIGHT_MAX_INVALID, HEIGHT_MIN_INVALID, IMAGE_URL_INVALID, WEIGHT_MAX_INVALID,
    WEIGHT_MIN_INVALID,
};
use crate::db::{BreedStore, DbError};
use crate::features::shared::validation::{
    has_length, is_valid_height, is_valid_url, is_valid_weight, FieldErrors,
};

const NAME_INVALID: &str = "Name is required and must be 1-100 characters";
const BREED_GROUP_INVALID: &str = "Breed group is required and must be 1-50 characters";
const TEMPERAMENT_INVALID: &str = "Temperament is required and must be 1-200 characters";
const LIFE_SPAN_INVALID: &str = "Life span is required and must be 1-50 characters";
const DESCRIPTION_INVALID: &str = "Description is required and must be 10-1000 characters";

/// Command to create a new breed
///
/// # Examples
///
/// ```rust,ignore
/// use breeds_server::features::breeds::commands::{CreateBreedCommand, RangeInput};
///
/// let command = CreateBreedCommand {
///     name: Some("Beagle".to_string()),
///     breed_group: Some("Hound".to_string()),
///     temperament: Some("Merry, Curious".to_string()),
///     life_span: Some("12-15 years".to_string()),
///     height_cm: Some(RangeInput::new(33, 41)),
///     weight_kg: Some(RangeInput::new(9.0, 11.0)),
///     description: Some("A small scent hound.".to_string()),
///     image_url: None,
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBreedCommand {
    pub name: Option<String>,
    pub breed_group: Option<String>,
    pub temperament: Option<String>,
    pub life_span: Option<String>,
    pub height_cm: Option<RangeInput<i64>>,
    pub weight_kg: Option<RangeInput<f64>>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Errors that can occur when creating a breed
#[derive(Debug, thiserror::Error)]
pub enum CreateBreedError {
    #[error("{0}")]
    Validation(#[from] FieldErrors),

    #[error("Height min cannot be greater than height max")]
    HeightRange,

    #[error("Weight min cannot be greater than weight max")]
    WeightRange,

    #[error("Breed with name '{0}' already exists")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(DbError),
}

impl CreateBreedCommand {
    /// Validates the command and produces the record to insert
    ///
    /// # Errors
    ///
    /// - `Validation` with one message per failing field
    /// - `HeightRange` / `WeightRange` when every field passes but a range
    ///   has `min > max`
    pub fn validate(&self) -> Result<NewBreed, CreateBreedError> {
        let height = self.height_cm.unwrap_or_default();
        let weight = self.weight_kg.unwrap_or_default();

        let mut errors = FieldErrors::default();
        errors.check(text_ok(&self.name, 1, 100), NAME_INVALID);
        errors.check(text_ok(&self.breed_group, 1, 50), BREED_GROUP_INVALID);
        errors.check(text_ok(&self.temperament, 1, 200), TEMPERAMENT_INVALID);
        errors.check(text_ok(&self.life_span, 1, 50), LIFE_SPAN_INVALID);
        errors.check(height.min.is_some_and(is_valid_height), HEIGHT_MIN_INVALID);
        errors.check(height.max.is_some_and(is_valid_height), HEIGHT_MAX_INVALID);
        errors.check(weight.min.is_some_and(is_valid_weight), WEIGHT_MIN_INVALID);
        errors.check(weight.max.is_some_and(is_valid_weight), WEIGHT_MAX_INVALID);
        errors.check(text_ok(&self.description, 10, 1000), DESCRIPTION_INVALID);
        if let Some(ref url) = self.image_url {
            errors.check(is_valid_url(url), IMAGE_URL_INVALID);
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        let breed = match (
            &self.name,
            &self.breed_group,
            &self.temperament,
            &self.life_span,
            height.min.zip(height.max),
            weight.min.zip(weight.max),
            &self.description,
        ) {
            (
                Some(name),
                Some(breed_group),
                Some(temperament),
                Some(life_span),
                Some((height_min, height_max)),
                Some((weight_min, weight_max)),
                Some(description),
            ) => NewBreed {
                name: name.clone(),
                breed_group: breed_group.clone(),
                temperament: temperament.clone(),
                life_span: life_span.clone(),
                height_cm: Range::new(height_min, height_max),
                weight_kg: Range::new(weight_min, weight_max),
                description: description.clone(),
                image_url: self.image_url.clone(),
            },
            _ => return Err(errors.into()),
        };

        if !breed.height_cm.is_ordered() {
            return Err(CreateBreedError::HeightRange);
        }
        if !breed.weight_kg.is_ordered() {
            return Err(CreateBreedError::WeightRange);
        }

        tracing::debug!("Command validation passed");
        Ok(breed)
    }
}

fn text_ok(value: &Option<String>, min: usize, max: usize) -> bool {
    value.as_deref().is_some_and(|v| has_length(v, min, max))
}

/// Handler function for creating breeds
///
/// # Errors
///
/// - Validation errors if command parameters are invalid
/// - `DuplicateName` if a breed with the same name exists
/// - Database errors if the insert fails
#[tracing::instrument(skip(store, command), fields(name = ?command.name))]
pub async fn handle(
    store: BreedStore,
    command: CreateBreedCommand,
) -> Result<Breed, CreateBreedError> {
    let breed = command.validate()?;

    tracing::info!("Creating breed");

    store.create(&breed).await.map_err(|e| match e {
        DbError::DuplicateName(name) => CreateBreedError::DuplicateName(name),
        other => CreateBreedError::Database(other),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn valid_command() -> CreateBreedCommand {
        CreateBreedCommand {
            name: Some("Beagle".to_string()),
            breed_group: Some("Hound".to_string()),
            temperament: Some("Merry, Curious".to_string()),
            life_span: Some("12-15 years".to_string()),
            height_cm: Some(RangeInput::new(33, 41)),
            weight_kg: Some(RangeInput::new(9.0, 11.0)),
            description: Some("A small scent hound with a great nose.".to_string()),
            image_url: Some("https://example.com/beagle.jpg".to_string()),
        }
    }

    fn messages(err: CreateBreedError) -> Vec<String> {
        match err {
            CreateBreedError::Validation(errors) => errors.messages().to_vec(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_command() {
        let breed = valid_command().validate().unwrap();
        assert_eq!(breed.name, "Beagle");
        assert_eq!(breed.height_cm, Range::new(33, 41));
        assert_eq!(breed.image_url.as_deref(), Some("https://example.com/beagle.jpg"));
    }

    #[test]
    fn test_image_url_is_optional() {
        let command = CreateBreedCommand {
            image_url: None,
            ..valid_command()
        };
        assert!(command.validate().unwrap().image_url.is_none());
    }

    #[test]
    fn test_empty_command_lists_every_required_field() {
        let messages = messages(CreateBreedCommand::default().validate().unwrap_err());
        assert_eq!(
            messages,
            [
                NAME_INVALID,
                BREED_GROUP_INVALID,
                TEMPERAMENT_INVALID,
                LIFE_SPAN_INVALID,
                HEIGHT_MIN_INVALID,
                HEIGHT_MAX_INVALID,
                WEIGHT_MIN_INVALID,
                WEIGHT_MAX_INVALID,
                DESCRIPTION_INVALID,
            ]
        );
    }

    #[test]
    fn test_field_bounds() {
        let command = CreateBreedCommand {
            name: Some("   ".to_string()),
            height_cm: Some(RangeInput::new(0, 201)),
            weight_kg: Some(RangeInput::new(0.05, 12.0)),
            description: Some("Too short".to_string()),
            image_url: Some("not a url".to_string()),
            ..valid_command()
        };

        let messages = messages(command.validate().unwrap_err());
        assert_eq!(
            messages,
            [
                NAME_INVALID,
                HEIGHT_MIN_INVALID,
                HEIGHT_MAX_INVALID,
                WEIGHT_MIN_INVALID,
                DESCRIPTION_INVALID,
                IMAGE_URL_INVALID,
            ]
        );
    }

    #[test]
    fn test_height_order() {
        let command = CreateBreedCommand {
            height_cm: Some(RangeInput::new(70, 60)),
            ..valid_command()
        };
        let err = command.validate().unwrap_err();
        assert!(matches!(err, CreateBreedError::HeightRange));
        assert_eq!(err.to_string(), "Height min cannot be greater than height max");
    }

    #[test]
    fn test_weight_order() {
        let command = CreateBreedCommand {
            weight_kg: Some(RangeInput::new(40.0, 30.0)),
            ..valid_command()
        };
        let err = command.validate().unwrap_err();
        assert!(matches!(err, CreateBreedError::WeightRange));
        assert_eq!(err.to_string(), "Weight min cannot be greater than weight max");
    }

    #[test]
    fn test_field_errors_win_over_range_order() {
        let command = CreateBreedCommand {
            name: None,
            height_cm: Some(RangeInput::new(70, 60)),
            ..valid_command()
        };
        assert_eq!(messages(command.validate().unwrap_err()), [NAME_INVALID]);
    }

    #[test]
    fn test_deserializes_partial_body() {
        let command: CreateBreedCommand =
            serde_json::from_str(r#"{"name": "Pug", "height_cm": {"min": 25}}"#).unwrap();
        assert_eq!(command.name.as_deref(), Some("Pug"));
        assert_eq!(command.height_cm.unwrap().max, None);
        assert!(command.breed_group.is_none());
    }
}
