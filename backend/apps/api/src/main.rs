//! API Server Entry Point
//!
//! Loads configuration, connects storage and serves the listing API.
//! Uses `anyhow` for startup errors; request-level errors are
//! `listing::ListingError` rendered through `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use listing::{ListingConfig, PgListingRepository, listing_router};
use platform::admin::ADMIN_KEY_HEADER;
use platform::rate_limit::InMemoryRateLimitStore;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "marketplace_api=info,listing=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection (optional)
    let repo = match env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()) {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            PgListingRepository::new(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, listing storage is unavailable");
            PgListingRepository::unconfigured()
        }
    };

    let listing_config = ListingConfig::new(env::var("ADMIN_KEY").ok(), env::var("APP_ENV").ok());
    if listing_config.admin_key().is_none() {
        tracing::warn!("ADMIN_KEY not set, all moderation requests will be rejected");
    }

    // Process-wide limiter state
    let limiter = Arc::new(InMemoryRateLimitStore::new());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            http::HeaderName::from_static(ADMIN_KEY_HEADER),
        ]));

    // Build router
    let app = Router::new()
        .nest("/api", listing_router(repo, limiter, listing_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("PORT") {
        Ok(raw) => raw.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
