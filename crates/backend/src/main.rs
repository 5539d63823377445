pub mod dashboards;
pub mod datasets;
pub mod shared;

use datasets::WageDatasets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request log line: time | duration | status | method | path
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        tracing::info!(
            "{} | {:>5}ms | {} {:>6} {}",
            chrono::Utc::now().format("%H:%M:%S"),
            start.elapsed().as_millis(),
            response.status().as_u16(),
            method,
            uri.path()
        );
        response
    }

    // All four tables load unconditionally before the server accepts
    // connections; any load failure aborts startup with a nonzero exit.
    let config = shared::config::load_config()?;
    let data_dir = shared::config::get_data_dir(&config)?;
    tracing::info!("Loading wage datasets from {}", data_dir.display());

    let loaded = WageDatasets::load(&data_dir, config.data.wage_encoding)
        .map_err(|e| anyhow::anyhow!("dataset load failed: {e}"))?;
    datasets::store::initialize_datasets(loaded)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    use dashboards::d410_wage_dashboard::handlers;

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/wages/meta", get(handlers::meta))
        .route("/api/wages/geo", get(handlers::geo_snapshot))
        .route("/api/wages/trend", get(handlers::trend_series))
        .route("/api/wages/bubbles", get(handlers::age_bubble_series))
        .route("/api/wages/bars", get(handlers::industry_bars))
        // Built frontend (wasm bundle + index.html)
        .fallback_service(ServeDir::new("assets"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Wage dashboard backend listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
