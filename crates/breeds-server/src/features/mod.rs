//! Feature modules implementing the Dog Breeds API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes.
//!
//! # Features
//!
//! - **breeds**: CRUD, pagination and search over dog breeds
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list, search)
//! - `routes.rs` - HTTP route definitions
//!
//! Commands and queries are plain structs with a `validate` method and a
//! standalone async `handle` function taking the [`BreedStore`].

pub mod breeds;
pub mod shared;

use axum::Router;

use crate::db::BreedStore;

/// Creates the API router with all feature routes mounted
///
/// - `/breeds` - Breed management
pub fn router(store: BreedStore) -> Router<()> {
    Router::new().nest("/breeds", breeds::breeds_routes().with_state(store))
}
