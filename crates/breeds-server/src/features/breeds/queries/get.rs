use breeds_common::Breed;
use serde::{Deserialize, Serialize};

use crate::db::{BreedStore, DbError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBreedQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetBreedError {
    #[error("Breed {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(store: BreedStore, query: GetBreedQuery) -> Result<Breed, GetBreedError> {
    store
        .get_by_id(query.id)
        .await?
        .ok_or(GetBreedError::NotFound(query.id))
}
