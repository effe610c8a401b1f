//! Dog Breeds Server Library
//!
//! HTTP server for managing a catalogue of dog breeds.
//!
//! # Overview
//!
//! - **API Endpoints**: CRUD, paginated listing and search under `/api/breeds`
//! - **Database Management**: embedded SQLite through SQLx
//! - **Configuration**: layered defaults, `breeds.toml` and environment
//! - **Middleware**: CORS, request tracing, compression and panic recovery
//!
//! # Architecture
//!
//! Each route is handled by a command (create, update, delete) or a query
//! (get, list, search). Commands and queries validate their own input and
//! call into [`BreedStore`], which owns the connection pool for the lifetime
//! of the process:
//!
//! ```text
//! open -> migrate -> seed_if_empty -> serve requests -> close
//! ```
//!
//! Every response uses the `{success, data, message, error, pagination}`
//! envelope from [`api::response`].
//!
//! # Example
//!
//! ```no_run
//! use breeds_server::{api, config::Config, BreedStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let store = BreedStore::open(&config.database).await?;
//!     store.migrate().await?;
//!     store.seed_if_empty().await?;
//!
//!     let app = api::create_router(store.clone(), &config);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     store.close().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use config::Config;
pub use db::{BreedStore, DbError};
pub use error::{ApiResult, AppError};
