//! Velocity gateway binary.
//!
//! - Config: `VELOCITY_CONFIG` or `velocity.yaml`, strict parse + validate
//! - Logging: `RUST_LOG` (default `info`)
//! - Graceful shutdown on Ctrl-C / SIGTERM
//! - Bind failure is fatal

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use velocity_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cfg_path = std::env::var("VELOCITY_CONFIG").ok();
    let cfg = config::load(cfg_path.as_deref()).expect("config load failed");
    let listen = cfg
        .server
        .listen_addr()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(&cfg).expect("app state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "velocity-gateway starting");
    let listener = TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");

    tracing::info!("velocity-gateway stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("ctrl-c received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
