//! Domain types shared across the Dog Breeds workspace

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Breed groups offered by the front-end and documented in the API schema.
///
/// The store accepts any 1-50 character group; this list is advisory.
pub const BREED_GROUPS: [&str; 7] = [
    "Sporting",
    "Hound",
    "Working",
    "Terrier",
    "Toy",
    "Non-Sporting",
    "Herding",
];

/// Inclusive `{min, max}` pair used for height and weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `true` when `min <= max`
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// A stored dog breed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breed {
    pub id: i64,
    pub name: String,
    pub breed_group: String,
    pub temperament: String,
    pub life_span: String,
    pub height_cm: Range<i64>,
    pub weight_kg: Range<f64>,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a breed that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBreed {
    pub name: String,
    pub breed_group: String,
    pub temperament: String,
    pub life_span: String,
    pub height_cm: Range<i64>,
    pub weight_kg: Range<f64>,
    pub description: String,
    pub image_url: Option<String>,
}

/// Partial update of one side or both sides of a [`Range`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangePatch<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Copy> RangePatch<T> {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Both bounds, when the patch supplies both
    pub fn both(&self) -> Option<Range<T>> {
        Some(Range {
            min: self.min?,
            max: self.max?,
        })
    }

    pub fn apply_to(&self, current: Range<T>) -> Range<T> {
        Range {
            min: self.min.unwrap_or(current.min),
            max: self.max.unwrap_or(current.max),
        }
    }
}

/// Partial update of a breed.
///
/// `None` means "keep the stored value". `image_url` is the only nullable
/// column, so it carries one more level: `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreedPatch {
    pub name: Option<String>,
    pub breed_group: Option<String>,
    pub temperament: Option<String>,
    pub life_span: Option<String>,
    pub height_cm: RangePatch<i64>,
    pub weight_kg: RangePatch<f64>,
    pub description: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl BreedPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.breed_group.is_none()
            && self.temperament.is_none()
            && self.life_span.is_none()
            && self.height_cm.is_empty()
            && self.weight_kg.is_empty()
            && self.description.is_none()
            && self.image_url.is_none()
    }

    /// Merge the patch over `current`, field by field.
    ///
    /// Identity and timestamps are carried over untouched; the store owns
    /// `updated_at`.
    pub fn apply_to(&self, current: &Breed) -> Breed {
        Breed {
            id: current.id,
            name: pick(&self.name, &current.name),
            breed_group: pick(&self.breed_group, &current.breed_group),
            temperament: pick(&self.temperament, &current.temperament),
            life_span: pick(&self.life_span, &current.life_span),
            height_cm: self.height_cm.apply_to(current.height_cm),
            weight_kg: self.weight_kg.apply_to(current.weight_kg),
            description: pick(&self.description, &current.description),
            image_url: match &self.image_url {
                Some(next) => next.clone(),
                None => current.image_url.clone(),
            },
            created_at: current.created_at,
            updated_at: current.updated_at,
        }
    }
}

fn pick(next: &Option<String>, current: &str) -> String {
    next.clone().unwrap_or_else(|| current.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn golden_retriever() -> Breed {
        let now = Utc::now();
        Breed {
            id: 1,
            name: "Golden Retriever".to_string(),
            breed_group: "Sporting".to_string(),
            temperament: "Friendly, Intelligent, Devoted".to_string(),
            life_span: "10-12 years".to_string(),
            height_cm: Range::new(55, 61),
            weight_kg: Range::new(25.0, 34.0),
            description: "A large-sized gun dog bred to retrieve waterfowl.".to_string(),
            image_url: Some("https://example.com/golden.jpg".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_range_ordering() {
        assert!(Range::new(55, 61).is_ordered());
        assert!(Range::new(30.5, 30.5).is_ordered());
        assert!(!Range::new(70, 60).is_ordered());
    }

    #[test]
    fn test_empty_patch_keeps_everything() {
        let breed = golden_retriever();
        let patch = BreedPatch::default();

        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&breed), breed);
    }

    #[test]
    fn test_patch_changes_only_named_fields() {
        let breed = golden_retriever();
        let patch = BreedPatch {
            temperament: Some("Calm".to_string()),
            height_cm: RangePatch {
                min: None,
                max: Some(65),
            },
            ..BreedPatch::default()
        };

        let merged = patch.apply_to(&breed);
        assert_eq!(merged.temperament, "Calm");
        assert_eq!(merged.height_cm, Range::new(55, 65));
        assert_eq!(merged.name, breed.name);
        assert_eq!(merged.weight_kg, breed.weight_kg);
        assert_eq!(merged.image_url, breed.image_url);
    }

    #[test]
    fn test_patch_can_clear_image_url() {
        let breed = golden_retriever();
        let patch = BreedPatch {
            image_url: Some(None),
            ..BreedPatch::default()
        };

        assert!(!patch.is_empty());
        assert_eq!(patch.apply_to(&breed).image_url, None);
    }

    #[test]
    fn test_range_patch_both() {
        let patch = RangePatch {
            min: Some(40.0),
            max: Some(30.0),
        };
        assert_eq!(patch.both(), Some(Range::new(40.0, 30.0)));

        let half = RangePatch::<i64> {
            min: Some(10),
            max: None,
        };
        assert_eq!(half.both(), None);
    }

    #[test]
    fn test_breed_serializes_flat_ranges() {
        let json = serde_json::to_value(golden_retriever()).unwrap();
        assert_eq!(json["height_cm"]["min"], 55);
        assert_eq!(json["weight_kg"]["max"], 34.0);
        assert_eq!(json["image_url"], "https://example.com/golden.jpg");
    }
}
