use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use performance_monitor::config::Config;
use performance_monitor::metrics::SystemSampler;
use performance_monitor::server::{self, PERFORMANCE_DATA_PATH};
use performance_monitor::{logging, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    logging::init(config.effective_log_level());

    // ── 1. Build shared state ────────────────────────────────────
    let sampler = SystemSampler::new(config.disk_path.clone());
    tracing::info!(disk_path = %sampler.disk_path().display(), "sampler ready");
    let state = Arc::new(AppState::new(sampler));

    // ── 2. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state);

    // ── 3. Bind & serve ──────────────────────────────────────────
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}, is it already in use?"))?;

    let local = listener.local_addr()?;
    tracing::info!("listening on http://{local}");
    tracing::info!("performance data → http://{local}{PERFORMANCE_DATA_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server exited with error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
}
