//! Catalog Server
//!
//! Serves the product and dipan type catalogue over native gRPC and over a
//! JSON/HTTP gateway backed by the same handlers.

use std::{net::AddrParseError, process};

use salvo::prelude::*;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use catalog_app::context::{AppContext, AppInitError};

use crate::{
    config::ServerConfig,
    observability::Observability,
    rpc::Handlers,
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod gateway;
mod healthcheck;
mod observability;
mod rpc;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid gRPC listen address: {0}")]
    GrpcAddress(#[source] AddrParseError),

    #[error("failed to initialize app context: {0}")]
    App(#[source] AppInitError),

    #[error("failed to bind HTTP listener on {addr}: {source}")]
    HttpBind {
        addr: String,
        #[source]
        source: salvo::Error,
    },

    #[error("gRPC server failed: {0}")]
    Grpc(#[source] tonic::transport::Error),
}

/// Catalog server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let result = run(&config).await;

    if let Err(startup_error) = &result {
        error!("{startup_error}");
    }

    observability.shutdown();

    if result.is_err() {
        process::exit(1);
    }
}

async fn run(config: &ServerConfig) -> Result<(), StartupError> {
    let grpc_addr = config
        .grpc
        .socket_addr()
        .map_err(StartupError::GrpcAddress)?;
    let http_addr = config.http.socket_addr();

    let app = AppContext::from_database_url(
        &config.database.database_url,
        config.database.max_connections,
    )
    .await
    .map_err(StartupError::App)?;

    let handlers = Handlers::from_app_context(&app);

    let listener = TcpListener::new(http_addr.clone())
        .try_bind()
        .await
        .map_err(|source| StartupError::HttpBind {
            addr: http_addr.clone(),
            source,
        })?;

    let http = Server::new(listener);
    let stop = CancellationToken::new();

    // Signal listener
    tokio::spawn({
        let stop = stop.clone();

        async move {
            if let Err(error) = shutdown::listen(stop).await {
                error!("failed to listen for shutdown signal: {error}");
            }
        }
    });

    // Salvo drains on its own handle once the token fires
    tokio::spawn({
        let stop = stop.clone();
        let handle = http.handle();

        async move {
            stop.cancelled().await;
            handle.stop_graceful(None);
        }
    });

    let mut grpc = tonic::transport::Server::builder().timeout(config.grpc.request_timeout());
    let grpc = handlers.clone().register(&mut grpc);

    info!(%grpc_addr, "starting gRPC server");
    info!(%http_addr, "starting HTTP gateway");

    let grpc_server = async {
        let result = grpc
            .serve_with_shutdown(grpc_addr, stop.cancelled())
            .await
            .map_err(StartupError::Grpc);

        // Take the gateway down with a failed gRPC server
        stop.cancel();

        result
    };

    let http_server = async {
        http.serve(gateway::service(State::from_handlers(handlers)))
            .await;

        Ok::<(), StartupError>(())
    };

    tokio::try_join!(grpc_server, http_server)?;

    info!("servers stopped");

    Ok(())
}
