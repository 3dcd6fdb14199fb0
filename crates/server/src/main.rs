use axum::{
    Router,
    routing::{get, post},
};
use booking::service::BookingService;
use cinema_client::client::CinemaClient;
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod doc;
mod dtos;
mod routes;
mod state;
mod utils;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let db = database::db::connect(&config.database_url)
        .await
        .expect("failed to connect to database");
    let cinema = CinemaClient::new(&config.cinema).expect("failed to build cinema client");
    let state = AppState {
        db,
        bookings: BookingService::new(cinema),
    };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::ApiDoc::openapi()))
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route(
            "/api/bookings/online",
            post(routes::booking::create_online_booking),
        )
        .route(
            "/api/bookings/offline",
            post(routes::booking::create_offline_booking),
        )
        .route(
            "/api/bookings/validate",
            post(routes::booking::validate_qr_code),
        )
        .route(
            "/api/bookings/user/{user_id}",
            get(routes::booking::get_user_bookings),
        )
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");
    info!("Running axum on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .expect("server error");
}
