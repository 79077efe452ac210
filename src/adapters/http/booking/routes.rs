//! HTTP routes for booking endpoints.

use axum::{middleware, routing::get, Router};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{
    cancel_booking, create_booking, get_booking, query_bookings, update_booking, BookingHandlers,
};

/// Creates the booking router. Every route requires a bearer token.
///
/// # Routes
/// - `POST /bookings` - Create
/// - `GET /bookings` - Summary (`summary=true`), single (`bookingId`), or list (`status`)
/// - `GET /bookings/:bookingId` - Get one
/// - `PUT /bookings/:bookingId` - Partial update
/// - `DELETE /bookings/:bookingId` - Cancel
pub fn booking_routes(handlers: BookingHandlers, auth: AuthState) -> Router {
    Router::new()
        .route("/bookings", get(query_bookings).post(create_booking))
        .route(
            "/bookings/:bookingId",
            get(get_booking).put(update_booking).delete(cancel_booking),
        )
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(handlers)
}
