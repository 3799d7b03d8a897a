//! Server entry-point: parse config, build the writer, serve.

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::info;

use seed_writer_server::config::ServerConfig;
use seed_writer_server::{configure, init_tracing};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(config.log_format);

    let writer = web::Data::new(config.build_writer().map_err(std::io::Error::other)?);

    info!(host = %config.host, port = config.port, "starting seed-writer server");
    HttpServer::new(move || App::new().app_data(writer.clone()).configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
