use breeds_common::Breed;
use serde::{Deserialize, Serialize};

use crate::db::{BreedStore, DbError};
use crate::features::shared::pagination::{InvalidPagination, PageRequest, Pagination};

/// Raw `?page=&limit=` query string values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBreedsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBreedsResponse {
    pub items: Vec<Breed>,
    pub pagination: Pagination,
}

#[derive(Debug, thiserror::Error)]
pub enum ListBreedsError {
    #[error(transparent)]
    InvalidPagination(#[from] InvalidPagination),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl ListBreedsQuery {
    pub fn validate(&self) -> Result<PageRequest, ListBreedsError> {
        Ok(PageRequest::parse(
            self.page.as_deref(),
            self.limit.as_deref(),
        )?)
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: BreedStore,
    query: ListBreedsQuery,
) -> Result<ListBreedsResponse, ListBreedsError> {
    let request = query.validate()?;

    let (items, total) = store.list(request.limit, request.offset()).await?;

    Ok(ListBreedsResponse {
        items,
        pagination: Pagination::new(request, total),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> ListBreedsQuery {
        ListBreedsQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_defaults() {
        let request = ListBreedsQuery::default().validate().unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = query(Some("0"), None).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid pagination parameters. Page must be >= 1, limit must be 1-100"
        );
        assert!(query(None, Some("101")).validate().is_err());
        assert!(query(Some("1"), Some("")).validate().is_err());
    }
}
