use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veranda_api::{app, state::{AppState, AuthConfig}};
use veranda_store::{
    ChangeFeed, DbClient, PgContactRepository, PgReservationRepository, PgRoomRepository,
    RedisClient,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veranda_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = veranda_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Veranda API on port {}", config.server.port);

    // Database Connection
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    // Redis Connection
    let redis = RedisClient::new(&config.redis.url)
        .await
        .expect("Failed to connect to Redis");

    // Dashboard change feed
    let changes = ChangeFeed::new(100);

    let app_state = AppState {
        rooms: Arc::new(PgRoomRepository::new(db.pool.clone())),
        reservations: Arc::new(PgReservationRepository::new(db.pool.clone())),
        contacts: Arc::new(PgContactRepository::new(db.pool.clone())),
        redis: Arc::new(redis),
        changes: changes.clone(),
        business_rules: config.business_rules.clone(),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
            admin_email: config.auth.admin_email.clone(),
            admin_password: config.auth.admin_password.clone(),
        },
    };

    tokio::spawn(worker_task(
        changes,
        config.business_rules.dashboard_refresh_seconds,
    ));

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

async fn worker_task(changes: ChangeFeed, period_seconds: u64) {
    veranda_api::worker::start_refresh_worker(changes, period_seconds).await;
}
