//! HR Feed Server - Internal HR Administration System
//!
//! REST API server for the HR feed dashboard.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrfeed_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("hrfeed_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HR Feed Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    // Connect info is needed so the login rate limiter can key on peer IP
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Rate limit the password gate
    let governor_conf = Box::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Invalid rate limiter configuration"),
    );
    let login_limiter = GovernorLayer {
        config: Box::leak(governor_conf),
    };

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login).layer(login_limiter))
        // Feed
        .route("/feed", get(api::feed::get_feed))
        // Vacation requests
        .route("/vacations", get(api::vacations::list_vacations))
        .route("/vacations/:id", get(api::vacations::get_vacation))
        .route("/vacations/:id/review", post(api::reviews::review_vacation))
        .route("/vacations/:id/workflow", put(api::vacations::update_workflow_step))
        // Travel notifications
        .route("/travel", get(api::travel::list_travel))
        .route("/travel/:id", get(api::travel::get_travel))
        .route("/travel/:id/review", post(api::reviews::review_travel))
        // IT equipment requests
        .route("/it-requests", get(api::it_requests::list_it_requests))
        .route("/it-requests/:id", get(api::it_requests::get_it_request))
        .route("/it-requests/:id/review", post(api::reviews::review_it_request))
        // Equipment inventory
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:serial", get(api::equipment::get_equipment))
        .route("/equipment/:serial", patch(api::equipment::update_equipment))
        .route("/equipment/:serial/depreciation", get(api::equipment::get_depreciation_schedule))
        // News
        .route("/news", get(api::news::list_news))
        .route("/news", post(api::news::create_news))
        .route("/news/:id", put(api::news::update_news))
        .route("/news/:id", delete(api::news::delete_news))
        // Change notifications
        .route("/events", get(api::events::subscribe))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
