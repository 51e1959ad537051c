use request_tester_app::relay::HttpRelayService;
use request_tester_app::routes::{self, AppState};
use request_tester_app::store::JsonFileStore;
use request_tester_app::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "request_tester_app=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting API Request Tester backend on port {}", config.port);

    let store = match JsonFileStore::open(config.preset_store_path.clone()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to open preset store at {}: {}",
                config.preset_store_path.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let state = AppState {
        relay: HttpRelayService::arc(),
        store: Arc::new(store),
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
