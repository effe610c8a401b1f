//! Breed queries (read operations)

pub mod get;
pub mod list;
pub mod search;

pub use get::{GetBreedError, GetBreedQuery};
pub use list::{ListBreedsError, ListBreedsQuery, ListBreedsResponse};
pub use search::{SearchBreedsError, SearchBreedsQuery, SearchBreedsResponse};
