//! Breed API routes
//!
//! Wires the commands and queries to Axum HTTP handlers.
//!
//! # Route Structure
//!
//! - `GET /api/breeds` - List breeds with pagination
//! - `GET /api/breeds/search?q=` - Search breeds by name, group or temperament
//! - `GET /api/breeds/:id` - Get a single breed
//! - `POST /api/breeds` - Create a breed
//! - `PUT /api/breeds/:id` - Update a breed
//! - `DELETE /api/breeds/:id` - Delete a breed

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use super::{
    commands::{
        CreateBreedCommand, CreateBreedError, DeleteBreedCommand, DeleteBreedError,
        UpdateBreedCommand, UpdateBreedError,
    },
    queries::{
        GetBreedError, GetBreedQuery, ListBreedsError, ListBreedsQuery, SearchBreedsError,
        SearchBreedsQuery,
    },
};
use crate::api::response::ApiResponse;
use crate::db::BreedStore;
use crate::error::{ApiResult, AppError, DUPLICATE_BREED_NAME};
use crate::features::shared::{parse_breed_id, InvalidPagination};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the breeds router with all routes configured
///
/// # Examples
///
/// ```rust,ignore
/// use axum::Router;
/// use breeds_server::features::breeds::routes::breeds_routes;
///
/// let app = Router::new()
///     .nest("/api/breeds", breeds_routes())
///     .with_state(store);
/// ```
pub fn breeds_routes() -> Router<BreedStore> {
    Router::new()
        .route("/", get(list_breeds).post(create_breed))
        .route("/search", get(search_breeds))
        .route("/:id", get(get_breed).put(update_breed).delete(delete_breed))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a new breed
///
/// # Endpoint
///
/// `POST /api/breeds`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Beagle",
///   "breed_group": "Hound",
///   "temperament": "Merry, Curious",
///   "life_span": "12-15 years",
///   "height_cm": { "min": 33, "max": 41 },
///   "weight_kg": { "min": 9, "max": 11 },
///   "description": "A small scent hound with a great nose.",
///   "image_url": "https://example.com/beagle.jpg"
/// }
/// ```
///
/// # Response
///
/// - `201 Created` - Breed created successfully
/// - `400 Bad Request` - Validation error or inverted range
/// - `409 Conflict` - A breed with the name already exists
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store, body))]
async fn create_breed(
    State(store): State<BreedStore>,
    body: Result<Json<CreateBreedCommand>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(command) = body.map_err(body_rejection)?;

    let breed = super::commands::create::handle(store, command).await?;

    tracing::info!(breed_id = breed.id, name = %breed.name, "Breed created via API");

    Ok(ApiResponse::success(breed)
        .with_message("Breed created successfully")
        .with_status(StatusCode::CREATED))
}

/// Update an existing breed
///
/// # Endpoint
///
/// `PUT /api/breeds/:id`
///
/// # Request Body
///
/// Any subset of the create fields. `"image_url": null` removes the image.
///
/// # Response
///
/// - `200 OK` - Breed updated successfully
/// - `400 Bad Request` - Invalid id, validation error or inverted range
/// - `404 Not Found` - Breed not found
/// - `409 Conflict` - The new name belongs to another breed
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store, body))]
async fn update_breed(
    State(store): State<BreedStore>,
    Path(id): Path<String>,
    body: Result<Json<UpdateBreedCommand>, JsonRejection>,
) -> ApiResult<Response> {
    let id = parse_breed_id(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let Json(mut command) = body.map_err(body_rejection)?;

    // Set id from path parameter
    command.id = id;

    let breed = super::commands::update::handle(store, command).await?;

    tracing::info!(breed_id = breed.id, name = %breed.name, "Breed updated via API");

    Ok(ApiResponse::success(breed)
        .with_message("Breed updated successfully")
        .with_status(StatusCode::OK))
}

/// Delete a breed
///
/// # Endpoint
///
/// `DELETE /api/breeds/:id`
///
/// # Response
///
/// - `200 OK` - Breed deleted successfully
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - Breed not found
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store))]
async fn delete_breed(
    State(store): State<BreedStore>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_breed_id(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;

    super::commands::delete::handle(store, DeleteBreedCommand { id }).await?;

    tracing::info!(breed_id = id, "Breed deleted via API");

    Ok(ApiResponse::message("Breed deleted successfully").with_status(StatusCode::OK))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// Get a single breed by id
///
/// # Endpoint
///
/// `GET /api/breeds/:id`
///
/// # Response
///
/// - `200 OK` - Breed found
/// - `400 Bad Request` - Invalid id
/// - `404 Not Found` - Breed not found
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store))]
async fn get_breed(
    State(store): State<BreedStore>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_breed_id(&id).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let breed = super::queries::get::handle(store, GetBreedQuery { id }).await?;

    tracing::debug!(breed_id = breed.id, "Breed retrieved via API");

    Ok(ApiResponse::success(breed).with_status(StatusCode::OK))
}

/// List breeds ordered by name
///
/// # Endpoint
///
/// `GET /api/breeds?page=1&limit=10`
///
/// # Query Parameters
///
/// - `page` - Page number (default: 1)
/// - `limit` - Items per page (default: 10, max: 100)
///
/// # Response
///
/// - `200 OK` - One page of breeds with pagination metadata
/// - `400 Bad Request` - Invalid pagination parameters
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store, query))]
async fn list_breeds(
    State(store): State<BreedStore>,
    query: Result<Query<ListBreedsQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) =
        query.map_err(|_| AppError::from(ListBreedsError::from(InvalidPagination)))?;

    let response = super::queries::list::handle(store, query).await?;

    tracing::debug!(
        count = response.items.len(),
        total = response.pagination.total,
        "Breeds listed via API"
    );

    Ok(ApiResponse::paginated(response.items, response.pagination).with_status(StatusCode::OK))
}

/// Search breeds
///
/// # Endpoint
///
/// `GET /api/breeds/search?q=retriever`
///
/// Matches the term case-insensitively against name, breed group and
/// temperament.
///
/// # Response
///
/// - `200 OK` - Matching breeds ordered by name (possibly none)
/// - `400 Bad Request` - Missing or blank `q`
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(store, query))]
async fn search_breeds(
    State(store): State<BreedStore>,
    query: Result<Query<SearchBreedsQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|_| AppError::from(SearchBreedsError::QueryRequired))?;

    let response = super::queries::search::handle(store, query).await?;

    tracing::debug!(count = response.items.len(), "Breeds searched via API");

    let message = response.message();
    Ok(ApiResponse::success(response.items)
        .with_message(message)
        .with_status(StatusCode::OK))
}

// ============================================================================
// Error Handling
// ============================================================================

fn body_rejection(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    AppError::validation(rejection.body_text())
}

impl From<CreateBreedError> for AppError {
    fn from(err: CreateBreedError) -> Self {
        match err {
            CreateBreedError::Validation(errors) => AppError::validation(errors.to_string()),
            err @ (CreateBreedError::HeightRange | CreateBreedError::WeightRange) => {
                AppError::BadRequest(err.to_string())
            },
            CreateBreedError::DuplicateName(_) => {
                AppError::Conflict(DUPLICATE_BREED_NAME.to_string())
            },
            CreateBreedError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<UpdateBreedError> for AppError {
    fn from(err: UpdateBreedError) -> Self {
        match err {
            UpdateBreedError::Validation(errors) => AppError::validation(errors.to_string()),
            err @ (UpdateBreedError::HeightRange | UpdateBreedError::WeightRange) => {
                AppError::BadRequest(err.to_string())
            },
            UpdateBreedError::NotFound(_) => AppError::breed_not_found(),
            UpdateBreedError::DuplicateName(_) => {
                AppError::Conflict(DUPLICATE_BREED_NAME.to_string())
            },
            UpdateBreedError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<DeleteBreedError> for AppError {
    fn from(err: DeleteBreedError) -> Self {
        match err {
            DeleteBreedError::NotFound(_) => AppError::breed_not_found(),
            DeleteBreedError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<GetBreedError> for AppError {
    fn from(err: GetBreedError) -> Self {
        match err {
            GetBreedError::NotFound(_) => AppError::breed_not_found(),
            GetBreedError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<ListBreedsError> for AppError {
    fn from(err: ListBreedsError) -> Self {
        match err {
            ListBreedsError::InvalidPagination(e) => AppError::BadRequest(e.to_string()),
            ListBreedsError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<SearchBreedsError> for AppError {
    fn from(err: SearchBreedsError) -> Self {
        match err {
            err @ SearchBreedsError::QueryRequired => AppError::BadRequest(err.to_string()),
            SearchBreedsError::Database(e) => AppError::Database(e),
        }
    }
}
