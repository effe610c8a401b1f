//! Provider-state hook for contract tests
//!
//! `POST /_pactSetup` with `{"state": "..."}` prepares the store before a
//! contract interaction is replayed. Only mounted when
//! `server.enable_state_setup` is set.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::response::ApiResponse;
use crate::db::{BreedStore, DbResult};

#[derive(Debug, Default, Deserialize)]
pub struct ProviderStateRequest {
    pub state: Option<String>,
}

/// States understood by the hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderState {
    /// Seed data is already present
    HasBreeds,
    HasBreedWithIdOne,
    BreedDoesNotExist,
    ApiIsRunning,
    /// Remove every breed
    DatabaseIsEmpty,
    /// Remove every breed, restart ids at 1 and insert the starter set
    ResetToSeed,
    Unknown(String),
}

impl ProviderState {
    pub fn parse(state: &str) -> Self {
        match state {
            "has breeds in database" => Self::HasBreeds,
            "has breed with id 1" => Self::HasBreedWithIdOne,
            "breed does not exist" => Self::BreedDoesNotExist,
            "API is running" => Self::ApiIsRunning,
            "database is empty" => Self::DatabaseIsEmpty,
            "reset to seed" => Self::ResetToSeed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Bring the store into this state
    pub async fn apply(&self, store: &BreedStore) -> DbResult<()> {
        match self {
            Self::HasBreeds
            | Self::HasBreedWithIdOne
            | Self::BreedDoesNotExist
            | Self::ApiIsRunning => {},
            Self::DatabaseIsEmpty => {
                let removed = store.clear().await?;
                tracing::info!(removed, "Cleared breeds for provider state");
            },
            Self::ResetToSeed => {
                store.clear().await?;
                store.reset_id_sequence().await?;
                let inserted = store.seed().await?;
                tracing::info!(inserted, "Reset breeds to seed data");
            },
            Self::Unknown(state) => {
                tracing::warn!(state = %state, "Unknown provider state");
            },
        }
        Ok(())
    }
}

/// Set up a provider state
///
/// # Endpoint
///
/// `POST /_pactSetup`
///
/// # Response
///
/// - `200 OK` - State applied (unknown states are accepted)
/// - `500 Internal Server Error` - The store could not be prepared
#[tracing::instrument(skip(store, body))]
pub async fn setup_provider_state(
    State(store): State<BreedStore>,
    body: Result<Json<ProviderStateRequest>, JsonRejection>,
) -> Response {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let state = ProviderState::parse(request.state.as_deref().unwrap_or_default());

    tracing::info!(state = ?state, "Setting up provider state");

    match state.apply(&store).await {
        Ok(()) => (StatusCode::OK, "OK").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to set up provider state");
            ApiResponse::error("Failed to set up provider state")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        },
    }
}
