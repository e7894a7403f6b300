//! Server startup and shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use authflow_domain::Config;
use authflow_infra::{schedule_open, SystemOpener};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::context::AppContext;
use crate::routes;

/// Build the context from `config` and serve until Ctrl-C
///
/// # Errors
/// Fails if the context cannot be built, the address cannot be bound, or
/// the server stops with an I/O error.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let ctx = AppContext::new(config).context("failed to initialise application")?;
    serve(Arc::new(ctx)).await
}

/// Bind the configured address and serve `ctx` until Ctrl-C
///
/// # Errors
/// See [`run`].
pub async fn serve(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    serve_with_shutdown(ctx, ctrl_c()).await
}

/// Bind the configured address and serve `ctx` until `shutdown` completes
///
/// In-flight requests are drained before returning.
///
/// # Errors
/// Fails if the address cannot be bound or the server stops with an I/O
/// error.
pub async fn serve_with_shutdown<F>(ctx: Arc<AppContext>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let server = &ctx.config.server;

    let listener = TcpListener::bind(&server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", server.bind_address))?;
    let local_addr = listener.local_addr().context("failed to determine local address")?;

    info!(address = %local_addr, public_url = %server.public_url, "server listening");

    if server.open_browser {
        schedule_open(
            Arc::new(SystemOpener),
            server.public_url.clone(),
            Duration::from_millis(server.browser_delay_ms),
        );
    }

    axum::serve(listener, routes::router(Arc::clone(&ctx)))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            // Without a signal handler the server runs until killed
            error!(error = %err, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
