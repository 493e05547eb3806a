use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::{Value, json};

use super::AppState;
use super::error::ApiError;
use crate::foundation::error::ChronosError;
use crate::request::model::{ProgressDevice, ProgressRequest, RenderRequest};
use crate::request::params::{self, QueryParams};
use crate::style::theme::Theme;

/// Shared-cache policy for month calendars, which only change with their query.
const CALENDAR_CACHE_CONTROL: &str = "s-maxage=86400, stale-while-revalidate";

/// Today in the zone named by the `timezone` parameter, else the server's local date.
fn today(query: &QueryParams) -> NaiveDate {
    params::today_in(
        params::requested_timezone(query),
        chrono::Utc::now(),
        chrono::Local::now().date_naive(),
    )
}

fn shared_cache_control(max_age: u64) -> String {
    format!("s-maxage={max_age}, stale-while-revalidate")
}

/// `GET /`: endpoint directory.
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/health": "service status",
            "/calendar/generate": "month calendar PNG; year, device=laptop|mobile, completed, shape",
            "/api/generate": "year progress PNG; date, year, device=desktop|mobile|iphone-lock, theme, shape, timezone",
            "/today-laptop": "year progress for today, desktop",
            "/today-mobile": "year progress for today, mobile",
            "/iphone-lock": "year progress for today, iPhone lock screen",
        },
        "themes": Theme::ALL.map(Theme::as_str),
        "shapes": ["circle", "square", "rounded"],
    }))
}

/// `GET /health`.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "name": env!("CARGO_PKG_NAME"),
    }))
}

/// `GET /calendar/generate`.
#[tracing::instrument(level = "info", skip_all)]
pub async fn calendar_generate(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let req = params::calendar_request(&query, today(&query))?;
    let disposition = format!("attachment; filename=\"{}\"", req.file_name());
    let png = render_png(&state, req.into()).await?;
    png_response(png, CALENDAR_CACHE_CONTROL.to_owned(), Some(disposition))
}

/// `GET /api/generate`.
#[tracing::instrument(level = "info", skip_all)]
pub async fn progress_generate(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let max_age = state.config.cache_max_age_secs;
    progress_for(state, query, None, max_age, |req| {
        format!("attachment; filename=\"{}\"", req.file_name())
    })
    .await
}

/// `GET /today-laptop`.
pub async fn today_laptop(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let max_age = state.config.cache_max_age_secs;
    progress_for(state, query, Some(ProgressDevice::Desktop), max_age, |req| {
        format!("attachment; filename=\"chronos-today-desktop-{}.png\"", req.theme)
    })
    .await
}

/// `GET /today-mobile`: shown inline, cached for the shorter "today" age.
pub async fn today_mobile(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let max_age = state.config.today_cache_max_age_secs;
    progress_for(state, query, Some(ProgressDevice::Mobile), max_age, |_| {
        "inline".to_owned()
    })
    .await
}

/// `GET /iphone-lock`.
pub async fn iphone_lock(
    State(state): State<AppState>,
    Query(query): Query<QueryParams>,
) -> Result<Response, ApiError> {
    let max_age = state.config.cache_max_age_secs;
    progress_for(state, query, Some(ProgressDevice::IphoneLock), max_age, |req| {
        format!("attachment; filename=\"chronos-iphone-lock-{}.png\"", req.theme)
    })
    .await
}

async fn progress_for(
    state: AppState,
    query: QueryParams,
    device: Option<ProgressDevice>,
    max_age: u64,
    disposition: impl FnOnce(&ProgressRequest) -> String,
) -> Result<Response, ApiError> {
    let req = params::progress_request(&query, today(&query), device)?;
    tracing::debug!(device = %req.device, date = %req.date, theme = %req.theme, "progress request");
    let disposition = disposition(&req);
    let png = render_png(&state, req.into()).await?;
    png_response(png, shared_cache_control(max_age), Some(disposition))
}

async fn render_png(state: &AppState, req: RenderRequest) -> Result<Vec<u8>, ApiError> {
    let engine = state.engine.clone();
    let png = tokio::task::spawn_blocking(move || engine.generate(&req))
        .await
        .map_err(|e| ChronosError::Other(anyhow::anyhow!("render task failed: {e}")))??;
    Ok(png)
}

fn png_response(
    png: Vec<u8>,
    cache_control: String,
    disposition: Option<String>,
) -> Result<Response, ApiError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .header(header::CONTENT_LENGTH, png.len())
        .header(header::CACHE_CONTROL, cache_control)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    if let Some(disposition) = disposition {
        builder = builder.header(header::CONTENT_DISPOSITION, disposition);
    }
    builder
        .body(Body::from(png))
        .map_err(|e| ApiError(ChronosError::Other(anyhow::Error::new(e))))
}

#[cfg(test)]
#[path = "../../tests/unit/server/handlers.rs"]
mod tests;
