//! Prometheus Farm Advisory - Backend Server
//!
//! Keeps a per-session digital twin of each farm, ranks candidate season
//! plans against the farmer's objectives and constraints, and lets a
//! language model explain the results in plain language.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::ChatCompletionsClient;
use services::{AssistantService, ConversationStore, FarmStateStore, ToolRegistry};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub farms: FarmStateStore,
    pub assistant: AssistantService,
    pub tools: Arc<ToolRegistry>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the state with fresh stores around the given assistant
    pub fn new(config: Config, assistant: AssistantService) -> Self {
        Self {
            farms: FarmStateStore::new(),
            assistant,
            tools: Arc::new(ToolRegistry::with_default_tools()),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prometheus_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Prometheus Farm Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    let conversations = ConversationStore::new(config.assistant.max_history_messages);
    let assistant = if config.llm.is_configured() {
        let client = ChatCompletionsClient::from_config(&config.llm)?;
        tracing::info!("Language model: {}", client.model());
        AssistantService::with_model(Arc::new(client), conversations)
    } else {
        tracing::warn!("No language model API key set; chat endpoints will report unavailable");
        AssistantService::new(conversations)
    };

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));

    // Create application state
    let state = AppState::new(config, assistant);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Prometheus Farm Advisory API"
}
