//! Calorix diet planner API server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calorix_backend::{planner_app, services::MealRecommender, Config, PlannerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "planner_api=debug,calorix_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Calorix Diet Planner API");
    tracing::info!("Environment: {}", config.environment);

    // No trained recommender ships with this build; the planner serves the
    // rule-based fallback until one is wired in here.
    let recommender: Option<Arc<dyn MealRecommender>> = None;
    if recommender.is_none() {
        tracing::info!("Using fallback recommendation system");
    }

    let state = PlannerState {
        recommender,
        config: Arc::new(config.clone()),
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.planner_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, planner_app(state)).await?;

    Ok(())
}
