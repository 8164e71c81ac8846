//! AeroSense HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use application::ports::{AirQualityPort, InferencePort, RandomSource, SmsPort};
use application::{AdviceService, AirQualityService, ChatService, SeriesGenerator};
use infrastructure::{
    AmbeeAdapter, AppConfig, HfInferenceAdapter, LogOnlySmsAdapter, ThreadRandom,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aerosense_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("AeroSense v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        ambee = %config.ambee.base_url,
        "Configuration loaded"
    );

    // Initialize adapters
    let provider: Arc<dyn AirQualityPort> = Arc::new(
        AmbeeAdapter::new(config.ambee.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Ambee client: {e}"))?,
    );
    let inference: Arc<dyn InferencePort> = Arc::new(
        HfInferenceAdapter::new(config.inference.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize inference client: {e}"))?,
    );
    let sms: Arc<dyn SmsPort> = Arc::new(LogOnlySmsAdapter::new());
    let rng: Arc<dyn RandomSource> = Arc::new(ThreadRandom::new());

    // Initialize services
    let state = AppState {
        air_quality: Arc::new(AirQualityService::new(provider, Arc::clone(&rng))),
        series: Arc::new(SeriesGenerator::new(Arc::clone(&rng))),
        advice: Arc::new(AdviceService::new(sms)),
        chat: Arc::new(ChatService::new(inference)),
        rng,
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
