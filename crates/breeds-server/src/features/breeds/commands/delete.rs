//! Delete breed command

use serde::{Deserialize, Serialize};

use crate::db::{BreedStore, DbError};

/// Command to delete a breed by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBreedCommand {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteBreedError {
    #[error("Breed {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Remove the breed; ids are never handed out again afterwards
#[tracing::instrument(skip(store), fields(id = command.id))]
pub async fn handle(
    store: BreedStore,
    command: DeleteBreedCommand,
) -> Result<(), DeleteBreedError> {
    if !store.delete(command.id).await? {
        return Err(DeleteBreedError::NotFound(command.id));
    }

    tracing::info!("Breed deleted");
    Ok(())
}
