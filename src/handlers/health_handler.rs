use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "soal-server"
    }))
}

/// Ready when the remote store, if configured, answers a ping. The local
/// store keeps serving either way, so this only reports degradation.
#[get("/health/ready")]
async fn readiness(state: web::Data<AppState>) -> HttpResponse {
    let remote_ok = state.remote_store_ready().await;
    let body = serde_json::json!({
        "status": if remote_ok { "ready" } else { "degraded" },
        "remoteStore": state.has_remote_store(),
        "generationConfigured": state.config.generation_api_key.is_some(),
    });

    if remote_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
