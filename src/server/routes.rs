use super::cache::Revalidating;
use super::error::ApiError;
use super::AppState;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::future::Future;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("/pr-stats", web::get().to(pr_stats))
            .route("/pr-stats/quality", web::get().to(quality_stats))
            .route("/pr-breakdown", web::get().to(pr_breakdown))
            .route("/quality-prs", web::get().to(quality_prs)),
    );
}

fn cache_control(cache: &Revalidating) -> String {
    match cache.window().as_secs() {
        0 => "no-store".to_string(),
        secs => format!("public, s-maxage={}", secs),
    }
}

async fn respond<T, F, Fut>(
    cache: &Revalidating,
    message: &'static str,
    refresh: F,
) -> Result<HttpResponse, ApiError>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let body = cache
        .get_or_refresh(refresh)
        .await
        .map_err(|e| ApiError::new(message, e))?;

    Ok(HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, cache_control(cache)))
        .json(body))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}

async fn pr_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(&state.pr_stats, "Failed to fetch PR statistics", || {
        state.engine.pr_stats()
    })
    .await
}

async fn quality_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(
        &state.quality_stats,
        "Failed to fetch quality PR statistics",
        || state.engine.quality_stats(),
    )
    .await
}

async fn pr_breakdown(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(&state.breakdown, "Failed to fetch PR breakdown", || {
        state.engine.breakdown()
    })
    .await
}

async fn quality_prs(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    respond(&state.quality_prs, "Failed to fetch quality PRs", || {
        state.engine.quality_prs()
    })
    .await
}
