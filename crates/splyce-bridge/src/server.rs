//! Process wiring: bind both sockets, start the three long-running tasks.
//!
//! Bind failures are fatal (no partial mode). Once bound, ingest and flush
//! run as background tasks and the HTTP server runs until Ctrl+C.

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::{TcpListener, UdpSocket};

use splyce_core::error::{Result, SplyceError};

use crate::app_state::AppState;
use crate::config::BridgeConfig;
use crate::{flush, router, transport};

pub async fn run(cfg: BridgeConfig) -> Result<()> {
    let udp_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.listen_udp_port));
    let http_addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, cfg.http_metrics_port));

    let socket = UdpSocket::bind(udp_addr)
        .await
        .map_err(|e| SplyceError::Bind(format!("udp {udp_addr}: {e}")))?;
    tracing::info!(%udp_addr, "listening for samples");

    let listener = TcpListener::bind(http_addr)
        .await
        .map_err(|e| SplyceError::Bind(format!("http {http_addr}: {e}")))?;
    tracing::info!(%http_addr, "serving prometheus metrics on /metrics");

    serve(AppState::new(cfg), socket, listener).await
}

/// Run the bridge on already-bound sockets.
pub async fn serve(state: AppState, socket: UdpSocket, listener: TcpListener) -> Result<()> {
    let period = state.cfg().flush_interval();

    let ingest = tokio::spawn(transport::udp::run_ingest(socket, state.clone()));
    let resets = tokio::spawn(flush::run_reset_loop(state.clone(), period));

    let app = router::build_router(state);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    ingest.abort();
    resets.abort();
    served.map_err(|e| SplyceError::Internal(format!("http server failed: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // without a signal handler, run until killed
        tracing::warn!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
