use booking::service::BookingService;
use cinema_client::client::CinemaClient;
use sea_orm::DatabaseConnection;

/// Shared handles built once at startup and cloned per request
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub bookings: BookingService<CinemaClient>,
}
