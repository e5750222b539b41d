use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bizverify::core::Verifier;
use bizverify::server::{ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        bind = %config.bind,
        vies = %config.vies.base_url,
        timeout_ms = u64::try_from(config.vies.timeout.as_millis()).unwrap_or(u64::MAX),
        "bizverify-server starting"
    );

    let transport = config
        .vies
        .into_transport()
        .context("failed to build VIES client")?;
    let app = router(Arc::new(Verifier::new(transport)));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
