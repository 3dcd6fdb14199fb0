use crate::routes::{booking, health, root};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        booking::create_online_booking,
        booking::create_offline_booking,
        booking::validate_qr_code,
        booking::get_user_bookings
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Bookings", description = "Booking creation, redemption, and listing"),
    ),
    info(
        title = "Booking API",
        version = "1.0.0",
        description = "Studio booking service",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
