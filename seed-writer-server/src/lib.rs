//! HTTP front for seed-writer: `POST /v1/generate` and `GET /healthz`.

pub mod config;
pub mod dto;
pub mod error;
pub mod generate;
pub mod health;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::ApiError;

/// Register routes and the JSON extractor config. The caller supplies the
/// `SeedWriter` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate::generate)
        .service(health::healthz);
}

/// Malformed or mistyped bodies get the same error envelope as
/// validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "rejected request body");
        ApiError::invalid_request(err.to_string()).into()
    })
}

/// Install the global tracing subscriber. Filter comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = match format {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
