mod cli;

use crate::cli::{PolicyArg, CLI};
use clap::Parser;
use hashgate_cache::{SingleFlightCache, TokenCache, Uncached};
use hashgate_gateway::{telemetry, App, AppState};
use hashgate_generator::{ContentHashGenerator, SaltedGenerator};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        policy = %config.policy,
        static_dir = ?config.static_dir,
        "starting gateway server"
    );

    let cache: Arc<dyn TokenCache> = match config.policy {
        PolicyArg::Salted => Arc::new(SingleFlightCache::new(SaltedGenerator::new())),
        PolicyArg::Content => Arc::new(Uncached::new(ContentHashGenerator)),
    };

    let mut app = App::new(AppState::new(cache));
    if let Some(dir) = config.static_dir {
        app = app.with_static_dir(dir);
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
