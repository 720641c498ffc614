// Axum API Server Module
//
// Purpose: REST API around the harvest calculator plus project storage.
// Identity is resolved upstream and arrives in the `x-user-id` header.

#[cfg(feature = "api")]
use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::calculator::calculate_harvest;

#[cfg(feature = "api")]
use crate::config::ServerConfig;

#[cfg(feature = "api")]
use crate::model::{HarvestResult, RooftopInput};

#[cfg(feature = "api")]
use crate::project_store::{Project, ProjectStore, StoreError};

#[cfg(feature = "api")]
use crate::validation::{validate, ValidationError};

/// Header carrying the caller identity
#[cfg(feature = "api")]
pub const USER_ID_HEADER: &str = "x-user-id";

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectStore>,
    pub config: Arc<ServerConfig>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Initializing in-memory project store...");
        Self {
            projects: Arc::new(ProjectStore::new()),
            config: Arc::new(config),
        }
    }

    /// Resolve requested paging against the configured page sizes
    fn page(&self, query: &PageQuery) -> (usize, usize) {
        let limit = query
            .limit
            .unwrap_or(self.config.default_page_size)
            .min(self.config.max_page_size);
        (limit, query.skip.unwrap_or(0))
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Stateless estimate (nothing stored)
        .route("/api/v1/estimate", post(estimate))

        // Project endpoints
        .route("/api/v1/projects", get(list_projects))
        .route("/api/v1/projects/calculate", post(calculate_and_create_project))
        .route("/api/v1/projects/:id", get(get_project))
        .route("/api/v1/users/me/projects", get(list_my_projects))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Caller Identity
// ============================================================================

/// Opaque user identity taken from `x-user-id`
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct CallerId(pub String);

#[cfg(feature = "api")]
#[async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Missing caller identity.".to_string()))?;

        Ok(CallerId(user_id.to_string()))
    }
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Validate and calculate without storing
#[cfg(feature = "api")]
async fn estimate(Json(input): Json<RooftopInput>) -> Result<Json<HarvestResult>, AppError> {
    validate(&input)?;
    let result = calculate_harvest(&input);

    tracing::debug!(
        "Estimate for {:?}: {} m³, feasible={}",
        input.location,
        result.harvestable_volume_m3,
        result.feasible
    );

    Ok(Json(result))
}

/// Calculate and persist a project for the caller
#[cfg(feature = "api")]
async fn calculate_and_create_project(
    State(state): State<AppState>,
    caller: CallerId,
    Json(payload): Json<ProjectCreate>,
) -> Result<Json<CalculateResponse>, AppError> {
    validate(&payload.input)?;
    let result = calculate_harvest(&payload.input);

    let project = state.projects.create(&caller.0, payload.input, result);
    tracing::info!("Created project {} for user {}", project.id, caller.0);

    Ok(Json(CalculateResponse {
        project_id: project.id.to_string(),
        result: project.result,
    }))
}

#[cfg(feature = "api")]
async fn get_project(
    State(state): State<AppState>,
    caller: CallerId,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project = state.projects.get(&id, &caller.0)?;
    Ok(Json(project))
}

#[cfg(feature = "api")]
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Project>> {
    let (limit, skip) = state.page(&query);
    tracing::debug!("Listing projects (limit={}, skip={})", limit, skip);
    Json(state.projects.list(limit, skip))
}

#[cfg(feature = "api")]
async fn list_my_projects(
    State(state): State<AppState>,
    caller: CallerId,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Project>> {
    let (limit, skip) = state.page(&query);
    Json(state.projects.list_for_user(&caller.0, limit, skip))
}

// ============================================================================
// Request / Response Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug)]
pub struct ProjectCreate {
    pub input: RooftopInput,
}

#[cfg(feature = "api")]
#[derive(serde::Serialize, Debug)]
pub struct CalculateResponse {
    pub project_id: String,
    pub result: HarvestResult,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize, Debug, Default)]
struct PageQuery {
    limit: Option<usize>,
    skip: Option<usize>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(feature = "api")]
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => AppError::BadRequest(err.to_string()),
            StoreError::NotFound => AppError::NotFound(err.to_string()),
        }
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
