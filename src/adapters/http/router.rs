//! Top-level router: account, booking and health routes plus shared layers.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::account::{LoginHandler, SignupHandler};
use crate::application::handlers::booking::{
    CancelBookingHandler, CreateBookingHandler, GetBookingHandler, ListBookingsHandler,
    SummarizeBookingsHandler, UpdateBookingHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    BookingRepository, PasswordHasher, TokenIssuer, TokenValidator, UserRepository,
};

use super::account::{account_routes, AccountHandlers};
use super::booking::{booking_routes, BookingHandlers};
use super::envelope::{success, ApiResponse};

/// Port implementations the HTTP layer is wired against.
#[derive(Clone)]
pub struct AppServices {
    pub bookings: Arc<dyn BookingRepository>,
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub token_validator: Arc<dyn TokenValidator>,
}

impl AppServices {
    fn account_handlers(&self) -> AccountHandlers {
        AccountHandlers::new(
            Arc::new(SignupHandler::new(self.users.clone(), self.hasher.clone())),
            Arc::new(LoginHandler::new(
                self.users.clone(),
                self.hasher.clone(),
                self.token_issuer.clone(),
            )),
        )
    }

    fn booking_handlers(&self) -> BookingHandlers {
        let repo = &self.bookings;
        BookingHandlers::new(
            Arc::new(CreateBookingHandler::new(repo.clone())),
            Arc::new(GetBookingHandler::new(repo.clone())),
            Arc::new(ListBookingsHandler::new(repo.clone())),
            Arc::new(UpdateBookingHandler::new(repo.clone())),
            Arc::new(CancelBookingHandler::new(repo.clone())),
            Arc::new(SummarizeBookingsHandler::new(repo.clone())),
        )
    }
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Response {
    success(StatusCode::OK, ApiResponse::ok(HealthStatus { status: "ok" }))
}

/// Routes without the cross-cutting layers.
pub fn api_routes(services: &AppServices) -> Router {
    Router::new()
        .nest("/auth", account_routes(services.account_handlers()))
        .merge(booking_routes(
            services.booking_handlers(),
            services.token_validator.clone(),
        ))
        .route("/health", get(health))
}

/// Full application router with tracing, timeout and CORS layers.
pub fn build_router(services: AppServices, server: &ServerConfig) -> Router {
    api_routes(&services)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
