//! Listener Config

use std::{
    net::{AddrParseError, SocketAddr},
    time::Duration,
};

use clap::Args;

/// gRPC listener settings.
#[derive(Debug, Args)]
pub struct GrpcConfig {
    /// gRPC host address
    #[arg(long, env = "GRPC_HOST", default_value = "0.0.0.0")]
    pub grpc_host: String,

    /// gRPC port
    #[arg(long, env = "GRPC_PORT", default_value_t = 50051)]
    pub grpc_port: u16,

    /// Upper bound on the time a single gRPC request may run.
    #[arg(long, env = "GRPC_REQUEST_TIMEOUT_SECONDS", default_value_t = 30)]
    pub grpc_request_timeout_seconds: u64,
}

impl GrpcConfig {
    /// Socket address for the gRPC listener.
    ///
    /// # Errors
    ///
    /// Returns an error when host and port do not form a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.grpc_host, self.grpc_port).parse()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.grpc_request_timeout_seconds)
    }
}

/// JSON/HTTP gateway listener settings.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// HTTP host address
    #[arg(long, env = "HTTP_HOST", default_value = "0.0.0.0")]
    pub http_host: String,

    /// HTTP port
    #[arg(long, env = "HTTP_PORT", default_value_t = 8080)]
    pub http_port: u16,
}

impl HttpConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
