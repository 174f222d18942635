//! Calorix food logging API server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calorix_backend::{
    classifier::FoodClassifier, external::GeminiClient, external::InferenceClient, food_app,
    Config, FoodState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_api=debug,calorix_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Calorix Food Logging API");
    tracing::info!("Environment: {}", config.environment);

    // Construct the classification model handle once at startup
    let classifier = InferenceClient::from_config(&config.inference)
        .map(|client| Arc::new(client) as Arc<dyn FoodClassifier>);
    if classifier.is_some() {
        tracing::info!("Classification model initialized");
    } else {
        tracing::error!("No classification model configured; /predict will return 500");
    }

    let gemini = GeminiClient::new(&config.gemini);

    let state = FoodState {
        classifier,
        gemini,
        config: Arc::new(config.clone()),
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.food_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, food_app(state)).await?;

    Ok(())
}
