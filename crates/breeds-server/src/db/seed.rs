//! Starter records written into an empty database

use breeds_common::{NewBreed, Range};

/// The three canonical breeds the service starts with.
pub fn starter_breeds() -> Vec<NewBreed> {
    vec![
        NewBreed {
            name: "Golden Retriever".to_string(),
            breed_group: "Sporting".to_string(),
            temperament: "Friendly, Intelligent, Devoted".to_string(),
            life_span: "10-12 years".to_string(),
            height_cm: Range::new(55, 61),
            weight_kg: Range::new(25.0, 34.0),
            description: "The Golden Retriever is a large-sized breed of dog bred as gun dogs to retrieve shot waterfowl.".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        NewBreed {
            name: "German Shepherd".to_string(),
            breed_group: "Herding".to_string(),
            temperament: "Loyal, Courageous, Confident".to_string(),
            life_span: "7-10 years".to_string(),
            height_cm: Range::new(55, 65),
            weight_kg: Range::new(22.0, 40.0),
            description: "The German Shepherd is a breed of medium to large-sized working dog that originated in Germany.".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1589941013453-ec89f33b5e95?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
        NewBreed {
            name: "Labrador Retriever".to_string(),
            breed_group: "Sporting".to_string(),
            temperament: "Friendly, Active, Outgoing".to_string(),
            life_span: "10-12 years".to_string(),
            height_cm: Range::new(55, 62),
            weight_kg: Range::new(25.0, 36.0),
            description: "The Labrador Retriever is a medium-large breed of retriever-gun dog."
                .to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1546527868-ccb7ee7dfa6a?w=400&h=300&fit=crop"
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_breeds_are_well_formed() {
        let breeds = starter_breeds();
        assert_eq!(breeds.len(), 3);
        assert_eq!(breeds[0].name, "Golden Retriever");

        for breed in &breeds {
            assert!(breed.height_cm.is_ordered(), "{}", breed.name);
            assert!(breed.weight_kg.is_ordered(), "{}", breed.name);
            assert!(breed.description.chars().count() >= 10);
        }
    }
}
