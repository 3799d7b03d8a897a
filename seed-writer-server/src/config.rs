//! Server configuration from flags and environment.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use seed_writer::{BuildError, SeedWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "seed-writer-server", about = "Serve seed-writer over HTTP")]
pub struct ServerConfig {
    #[arg(long, env = "SEED_WRITER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "SEED_WRITER_PORT", default_value_t = 8080)]
    pub port: u16,
    /// Template overrides merged over the built-in set.
    #[arg(long, env = "SEED_WRITER_TEMPLATES")]
    pub templates: Option<PathBuf>,
    #[arg(long, env = "SEED_WRITER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Build the writer this configuration describes, reading today's
    /// date from the system clock.
    pub fn build_writer(&self) -> Result<SeedWriter, BuildError> {
        let mut builder = SeedWriter::builder();
        if let Some(ref path) = self.templates {
            builder = builder.templates_path(path);
        }
        builder.build()
    }
}
