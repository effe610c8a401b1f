pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateBreedCommand, CreateBreedError, DeleteBreedCommand, DeleteBreedError, RangeInput,
    UpdateBreedCommand, UpdateBreedError,
};

pub use queries::{
    GetBreedError, GetBreedQuery, ListBreedsError, ListBreedsQuery, ListBreedsResponse,
    SearchBreedsError, SearchBreedsQuery, SearchBreedsResponse,
};

pub use routes::breeds_routes;
