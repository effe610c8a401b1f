//! Helpers shared by the breed commands and queries

pub mod pagination;
pub mod validation;

pub use pagination::{InvalidPagination, PageRequest, Pagination};
pub use validation::{parse_breed_id, FieldErrors, InvalidBreedId};
