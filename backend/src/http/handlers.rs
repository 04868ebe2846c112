//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for validation and storage. Path rejections are taken as `Result`s
//! and bodies go through [`ValidatedJson`], so malformed input surfaces as
//! validation errors naming the offending field.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use super::dto::{
    ContentCreate, ContentItem, HealthResponse, Investor, InvestorCreate, MessageResponse,
    RootResponse, SimpleAnalysis, Startup, StartupCreate,
};
use super::error::AppError;
use super::extract::ValidatedJson;
use super::state::AppState;
use crate::api::{ContentId, InvestorId, StartupId};
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

type PathParam<T> = Result<Path<T>, PathRejection>;

// =============================================================================
// Service info
// =============================================================================

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

/// GET /health
///
/// Reports how many startups and investors are currently stored.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let counts = db_services::health_check(state.repository.as_ref()).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        startups_count: counts.startups,
        investors_count: counts.investors,
    }))
}

// =============================================================================
// Startups
// =============================================================================

/// POST /api/startups
pub async fn create_startup(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<StartupCreate>,
) -> HandlerResult<Startup> {
    let startup = db_services::create_startup(state.repository.as_ref(), data).await?;
    Ok(Json(startup))
}

/// GET /api/startups
pub async fn list_startups(State(state): State<AppState>) -> HandlerResult<Vec<Startup>> {
    let startups = db_services::list_startups(state.repository.as_ref()).await?;
    Ok(Json(startups))
}

/// GET /api/startups/{startup_id}
pub async fn get_startup(
    State(state): State<AppState>,
    path: PathParam<i64>,
) -> HandlerResult<Startup> {
    let Path(startup_id) = path?;
    let startup =
        db_services::get_startup(state.repository.as_ref(), StartupId::new(startup_id)).await?;
    Ok(Json(startup))
}

// =============================================================================
// Content
// =============================================================================

/// POST /api/startups/{startup_id}/content
pub async fn add_content(
    State(state): State<AppState>,
    path: PathParam<i64>,
    ValidatedJson(data): ValidatedJson<ContentCreate>,
) -> HandlerResult<ContentItem> {
    let Path(startup_id) = path?;
    let item =
        db_services::add_content(state.repository.as_ref(), StartupId::new(startup_id), data)
            .await?;
    Ok(Json(item))
}

/// GET /api/startups/{startup_id}/content
pub async fn list_content(
    State(state): State<AppState>,
    path: PathParam<i64>,
) -> HandlerResult<Vec<ContentItem>> {
    let Path(startup_id) = path?;
    let items =
        db_services::list_content(state.repository.as_ref(), StartupId::new(startup_id)).await?;
    Ok(Json(items))
}

/// DELETE /api/startups/{startup_id}/content/{content_id}
///
/// Succeeds even if the content item does not exist.
pub async fn delete_content(
    State(state): State<AppState>,
    path: PathParam<(i64, i64)>,
) -> HandlerResult<MessageResponse> {
    let Path((startup_id, content_id)) = path?;
    db_services::delete_content(
        state.repository.as_ref(),
        StartupId::new(startup_id),
        ContentId::new(content_id),
    )
    .await?;
    Ok(Json(MessageResponse::new("Content deleted successfully")))
}

/// POST /api/startups/{startup_id}/analyze
///
/// Rule-based analysis of the startup's content. 400 if there is no content.
pub async fn analyze_startup(
    State(state): State<AppState>,
    path: PathParam<i64>,
) -> HandlerResult<SimpleAnalysis> {
    let Path(startup_id) = path?;
    let analysis =
        services::analyze_startup(state.repository.as_ref(), StartupId::new(startup_id)).await?;
    Ok(Json(analysis))
}

// =============================================================================
// Investors
// =============================================================================

/// POST /api/investors
pub async fn create_investor(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<InvestorCreate>,
) -> HandlerResult<Investor> {
    let investor = db_services::create_investor(state.repository.as_ref(), data).await?;
    Ok(Json(investor))
}

/// GET /api/investors
pub async fn list_investors(State(state): State<AppState>) -> HandlerResult<Vec<Investor>> {
    let investors = db_services::list_investors(state.repository.as_ref()).await?;
    Ok(Json(investors))
}

/// GET /api/investors/{investor_id}
pub async fn get_investor(
    State(state): State<AppState>,
    path: PathParam<i64>,
) -> HandlerResult<Investor> {
    let Path(investor_id) = path?;
    let investor =
        db_services::get_investor(state.repository.as_ref(), InvestorId::new(investor_id))
            .await?;
    Ok(Json(investor))
}

/// PUT /api/investors/{investor_id}
///
/// Replaces every field except `id` and `created_at`.
pub async fn update_investor(
    State(state): State<AppState>,
    path: PathParam<i64>,
    ValidatedJson(data): ValidatedJson<InvestorCreate>,
) -> HandlerResult<Investor> {
    let Path(investor_id) = path?;
    let id = InvestorId::new(investor_id);
    let investor = db_services::update_investor(state.repository.as_ref(), id, data).await?;
    Ok(Json(investor))
}

/// DELETE /api/investors/{investor_id}
pub async fn delete_investor(
    State(state): State<AppState>,
    path: PathParam<i64>,
) -> HandlerResult<MessageResponse> {
    let Path(investor_id) = path?;
    db_services::delete_investor(state.repository.as_ref(), InvestorId::new(investor_id)).await?;
    Ok(Json(MessageResponse::new("Investor deleted successfully")))
}
