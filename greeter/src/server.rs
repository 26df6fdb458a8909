use crate::config::Config;
use crate::error::{GreeterError, GreeterResult};
use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Build the HTTP router; `/health` is only mounted when asked for
pub fn build_router(state: AppState, health_route: bool) -> Router {
    let mut router: Router<AppState> =
        Router::new().route("/", get(handlers::greeting_handler));

    if health_route {
        router = router.route("/health", get(handlers::health_handler));
    }

    router.with_state(state).layer(TraceLayer::new_for_http())
}

/// Bind the listener. Called once per process.
pub async fn bind(addr: SocketAddr) -> GreeterResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| GreeterError::Bind { addr, source })
}

/// Serve until `shutdown` resolves, letting in-flight requests finish
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> GreeterResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

pub async fn start(config: Config) -> GreeterResult<()> {
    let app = build_router(AppState::new(&config.greeting), config.health_route);
    let listener = bind(config.socket_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("{}", config.banner);
    tracing::info!("Server running at http://localhost:{}", local_addr.port());
    tracing::debug!("Listening on {}", local_addr);

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
