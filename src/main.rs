//! CouponHub backend entry point.
//!
//! Loads configuration, connects Postgres and Redis, wires the adapters
//! into the HTTP router, and serves until SIGTERM/Ctrl+C.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use couponhub::adapters::http::{api_router, AppState};
use couponhub::adapters::ml::UnimplementedRecommendationEngine;
use couponhub::adapters::postgres::{
    PostgresFeaturedReader, PostgresLoyaltyReader, PostgresSessionStore,
    PostgresSubscriptionRepository,
};
use couponhub::adapters::redis::{RedisJobQueue, RedisSessionCache};
use couponhub::adapters::stripe::{StripeConfig, StripeProvider};
use couponhub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "Starting CouponHub backend"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!().run(&pool).await?;
    }

    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_conn = tokio::time::timeout(
        config.redis.timeout(),
        redis_client.get_multiplexed_tokio_connection(),
    )
    .await
    .map_err(|_| "Timed out connecting to Redis")??;

    let stripe = StripeProvider::new(StripeConfig::new(config.payment.stripe_api_key.clone()));

    let state = AppState {
        session_store: Arc::new(PostgresSessionStore::new(pool.clone())),
        session_cache: Arc::new(RedisSessionCache::new(
            redis_conn.clone(),
            config.redis.session_ttl_secs,
        )),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        payment: Arc::new(stripe),
        recommendations: Arc::new(UnimplementedRecommendationEngine::new()),
        loyalty: Arc::new(PostgresLoyaltyReader::new(pool.clone())),
        featured: Arc::new(PostgresFeaturedReader::new(pool)),
        scheduler: Arc::new(RedisJobQueue::new(redis_conn)),
        portal_return_url: config.payment.portal_return_url.clone(),
    };

    let app = api_router(state, config.cron.secret.clone())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<_> = origins
        .iter()
        .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
