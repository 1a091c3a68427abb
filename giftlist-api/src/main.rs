use std::net::SocketAddr;
use std::sync::Arc;

use giftlist_api::{app, state::AppState};
use giftlist_api::session::SessionAuthenticator;
use giftlist_core::{PresentStore, ReservationGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "giftlist_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing required config (admin identity, JWT secret, reservation
    // code, database URL) stops the process here, before any socket.
    let config = giftlist_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Giftlist API on port {}", config.server.port);

    let db = giftlist_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    std::fs::create_dir_all(&config.uploads.dir).expect("Failed to create uploads directory");

    let store: Arc<dyn PresentStore> =
        Arc::new(giftlist_store::PgPresentStore::new(db.pool.clone()));

    let state = AppState {
        store: store.clone(),
        sessions: Arc::new(SessionAuthenticator::new(
            config.auth.admin_username.clone(),
            config.auth.admin_password.clone(),
            config.auth.jwt_secret.clone(),
            config.auth.session_ttl_seconds,
        )),
        reservations: Arc::new(ReservationGuard::new(
            config.reservation.secret_code.clone(),
            store,
        )),
        uploads_dir: config.uploads.dir.clone().into(),
        secure_cookies: config.server.secure_cookies,
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
