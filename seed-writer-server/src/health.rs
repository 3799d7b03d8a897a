//! Liveness probe.

use actix_web::{get, http::header, HttpResponse};
use chrono::Utc;
use serde_json::json;

/// Always 200 while the process can serve requests.
#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    let ts = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string();
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(json!({ "ok": true, "ts": ts }))
}
