//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, TelemetryConfig},
    server::{GrpcConfig, HttpConfig},
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Catalog server configuration
#[derive(Debug, Parser)]
#[command(name = "catalog-server", about = "Catalog gRPC + JSON gateway server", long_about = None)]
pub struct ServerConfig {
    /// gRPC listener settings.
    #[command(flatten)]
    pub grpc: GrpcConfig,

    /// JSON/HTTP gateway listener settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
