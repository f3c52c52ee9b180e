use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serves the documentation files in `static_dir` as-is.
pub async fn start_web_server(bind_addr: SocketAddr, static_dir: String) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        static_dir = %static_dir,
        url = format!("http://{}", bind_addr),
        "Starting web server"
    );

    let app = create_app(&static_dir);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(static_dir: &str) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
