//! HTTP routes.
//!
//! Read-only JSON endpoints over the catalogs. Every route is served both
//! at the root and under `/api`.

use atlas_domain::{HeroId, QueryParams, RegionId, SkillId};
use atlas_usecase::projection::{HeroDetail, HeroSummary, RegionView, SkillView, StatsView};
use atlas_usecase::{AtlasCatalogs, Page, PageRequest, UseCaseError};
use axum::{
    extract::{OriginalUri, Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use url::form_urlencoded;

/// Shared state of every handler
pub type AppState = Arc<AtlasCatalogs>;

/// Create the resource routes, relative to their mount point.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/heroes/", get(list_heroes))
        .route("/heroes/by_class/", get(heroes_by_class))
        .route("/heroes/stats/", get(hero_stats))
        .route("/heroes/top/", get(top_heroes))
        .route("/heroes/{id}/", get(get_hero))
        .route("/stats/", get(hero_stats))
        .route("/regions/", get(list_regions))
        .route("/regions/{id}/", get(get_region))
        .route("/skills/", get(list_skills))
        .route("/skills/{id}/", get(get_skill))
}

/// The complete application: resources at `/` and `/api`, a health probe
/// and request tracing.
pub fn router(catalogs: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .with_state(catalogs)
}

async fn health() -> &'static str {
    "OK"
}

fn query_params(raw: Option<String>) -> QueryParams {
    raw.map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Path ids that are not numbers name nothing: 404, not 400
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| ApiError::NotFound("Not found.".to_string()))
}

// =============================================================================
// Heroes
// =============================================================================

async fn list_heroes(
    State(app): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(raw): RawQuery,
) -> Result<Json<Page<HeroSummary>>, ApiError> {
    let params = query_params(raw);
    let page = app.heroes.list(PageRequest::new(uri.path(), &params))?;
    Ok(Json(page))
}

async fn get_hero(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeroDetail>, ApiError> {
    let hero = app.heroes.retrieve(HeroId::new(parse_id(&id)?))?;
    Ok(Json(hero))
}

async fn heroes_by_class(
    State(app): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(raw): RawQuery,
) -> Result<Json<Page<HeroDetail>>, ApiError> {
    let params = query_params(raw);
    let page = app.heroes.by_class(PageRequest::new(uri.path(), &params))?;
    Ok(Json(page))
}

async fn hero_stats(
    State(app): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<StatsView>, ApiError> {
    Ok(Json(app.heroes.stats(&query_params(raw))?))
}

async fn top_heroes(
    State(app): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<HeroDetail>>, ApiError> {
    Ok(Json(app.heroes.top(&query_params(raw))?))
}

// =============================================================================
// Regions & Skills
// =============================================================================

async fn list_regions(
    State(app): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(raw): RawQuery,
) -> Result<Json<Page<RegionView>>, ApiError> {
    let params = query_params(raw);
    Ok(Json(app.regions.list(PageRequest::new(uri.path(), &params))?))
}

async fn get_region(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegionView>, ApiError> {
    Ok(Json(app.regions.retrieve(RegionId::new(parse_id(&id)?))?))
}

async fn list_skills(
    State(app): State<AppState>,
    OriginalUri(uri): OriginalUri,
    RawQuery(raw): RawQuery,
) -> Result<Json<Page<SkillView>>, ApiError> {
    let params = query_params(raw);
    Ok(Json(app.skills.list(PageRequest::new(uri.path(), &params))?))
}

async fn get_skill(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SkillView>, ApiError> {
    Ok(Json(app.skills.retrieve(SkillId::new(parse_id(&id)?))?))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Validation(err) => {
                warn!(error = %err, "rejected request");
                ApiError::BadRequest(err.to_string())
            }
            UseCaseError::NotFound { .. } | UseCaseError::InvalidPage => {
                ApiError::NotFound(e.to_string())
            }
            UseCaseError::Store(err) => {
                error!(error = %err, "store failure");
                ApiError::Internal(err.to_string())
            }
        }
    }
}
