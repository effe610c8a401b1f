use breeds_common::Breed;
use serde::{Deserialize, Serialize};

use crate::db::{BreedStore, DbError};

/// `?q=` of the search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBreedsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchBreedsResponse {
    pub items: Vec<Breed>,
    /// The query as the client sent it, untrimmed
    pub query: String,
}

impl SearchBreedsResponse {
    pub fn message(&self) -> String {
        format!("Found {} breeds matching \"{}\"", self.items.len(), self.query)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchBreedsError {
    #[error("Search query is required")]
    QueryRequired,
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl SearchBreedsQuery {
    /// The trimmed search term; blank or missing is rejected
    pub fn validate(&self) -> Result<&str, SearchBreedsError> {
        match self.q.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => Ok(term),
            _ => Err(SearchBreedsError::QueryRequired),
        }
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: BreedStore,
    query: SearchBreedsQuery,
) -> Result<SearchBreedsResponse, SearchBreedsError> {
    let term = query.validate()?;
    let items = store.search(term).await?;

    Ok(SearchBreedsResponse {
        items,
        query: query.q.clone().unwrap_or_default(),
    })
}
