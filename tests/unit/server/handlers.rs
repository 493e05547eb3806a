use std::sync::Arc;
use std::time::Duration;

use axum::response::IntoResponse;

use super::*;
use crate::config::ServiceConfig;
use crate::fonts::FontSet;
use crate::quotes::QuoteCache;
use crate::render::engine::WallpaperEngine;

fn state() -> Option<AppState> {
    let fonts = FontSet::discover(None).ok()?;
    let quotes = Arc::new(QuoteCache::new(None, Duration::from_secs(60)));
    Some(AppState::new(
        WallpaperEngine::new(fonts, quotes),
        ServiceConfig::default(),
    ))
}

fn query(pairs: &[(&str, &str)]) -> Query<QueryParams> {
    Query(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    )
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let Json(body) = health().await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].as_str().is_some_and(|s| !s.is_empty()));
}

#[tokio::test]
async fn index_lists_every_route() {
    let Json(body) = index().await;
    for route in [
        "/health",
        "/calendar/generate",
        "/api/generate",
        "/today-laptop",
        "/today-mobile",
        "/iphone-lock",
    ] {
        assert!(body["endpoints"].get(route).is_some(), "{route}");
    }
    assert_eq!(body["themes"], json!(["cyber", "swiss", "deep", "slate", "space"]));
}

#[test]
fn png_response_sets_headers() {
    let resp = png_response(
        vec![1, 2, 3],
        CALENDAR_CACHE_CONTROL.to_owned(),
        Some("attachment; filename=\"calendar-2024-laptop.png\"".to_owned()),
    )
    .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(headers[header::CONTENT_LENGTH], "3");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "s-maxage=86400, stale-while-revalidate"
    );
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"calendar-2024-laptop.png\""
    );
}

#[tokio::test]
async fn out_of_range_year_is_rejected_before_rendering() {
    let Some(state) = state() else {
        return;
    };
    let err = calendar_generate(State(state.clone()), query(&[("year", "1899")]))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    let err = progress_generate(State(state), query(&[("theme", "neon")]))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn today_endpoints_use_shared_cache_policy() {
    assert_eq!(shared_cache_control(600), "s-maxage=600, stale-while-revalidate");
}

#[tokio::test]
async fn today_mobile_is_inline_with_short_cache_age() {
    let Some(state) = state() else {
        return;
    };
    let resp = today_mobile(State(state), query(&[("timezone", "Asia/Tokyo")]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CACHE_CONTROL],
        "s-maxage=600, stale-while-revalidate"
    );
    assert_eq!(resp.headers()[header::CONTENT_DISPOSITION], "inline");
}

#[tokio::test]
async fn today_laptop_names_the_theme() {
    let Some(state) = state() else {
        return;
    };
    let resp = today_laptop(State(state), query(&[("theme", "swiss")]))
        .await
        .unwrap();
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"chronos-today-desktop-swiss.png\""
    );
    assert_eq!(
        resp.headers()[header::CACHE_CONTROL],
        "s-maxage=3600, stale-while-revalidate"
    );
}
