//! HTTP handlers for booking endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Response,
    Json,
};

use crate::adapters::http::envelope::{
    failure, internal_error, invalid_request_schema, success, ApiResponse, MessageData,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::booking::{
    CancelBookingCommand, CancelBookingHandler, CreateBookingCommand, CreateBookingHandler,
    GetBookingHandler, GetBookingQuery, ListBookingsHandler, ListBookingsQuery,
    SummarizeBookingsHandler, SummarizeBookingsQuery, UpdateBookingCommand, UpdateBookingHandler,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::{AuthenticatedUser, BookingId, BookingStatus, ValidationError};

use super::dto::{
    BookingCreatedResponse, BookingResponse, BookingSummaryResponse, BookingsQuery,
    CreateBookingRequest, UpdateBookingRequest,
};

/// Message for both a missing booking and one owned by someone else.
pub const BOOKING_NOT_FOUND: &str = "No Booking Found for Given Id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BookingHandlers {
    create_handler: Arc<CreateBookingHandler>,
    get_handler: Arc<GetBookingHandler>,
    list_handler: Arc<ListBookingsHandler>,
    update_handler: Arc<UpdateBookingHandler>,
    cancel_handler: Arc<CancelBookingHandler>,
    summarize_handler: Arc<SummarizeBookingsHandler>,
}

impl BookingHandlers {
    pub fn new(
        create_handler: Arc<CreateBookingHandler>,
        get_handler: Arc<GetBookingHandler>,
        list_handler: Arc<ListBookingsHandler>,
        update_handler: Arc<UpdateBookingHandler>,
        cancel_handler: Arc<CancelBookingHandler>,
        summarize_handler: Arc<SummarizeBookingsHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
            cancel_handler,
            summarize_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /bookings - Create a booking
pub async fn create_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return invalid_request_schema();
    };
    if req.validate().is_err() {
        return invalid_request_schema();
    }

    let cmd = CreateBookingCommand {
        user_id: user.id,
        car_name: req.car_name,
        days: req.days,
        rent_per_day: req.rent_per_day,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(booking) => success(
            StatusCode::CREATED,
            ApiResponse::ok(BookingCreatedResponse {
                message: "Booking created successfully".to_string(),
                booking_id: booking.id().to_string(),
                total_cost: booking.total_cost(),
            }),
        ),
        Err(e) => handle_booking_error(e),
    }
}

/// GET /bookings - Summary, single booking, or list
///
/// `summary=true` wins over `bookingId`, which wins over the plain list.
pub async fn query_bookings(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    params: Result<Query<BookingsQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(params)) = params else {
        return invalid_request_schema();
    };

    if params.wants_summary() {
        return summarize(&handlers, user).await;
    }

    if let Some(raw_id) = params.booking_id.as_deref() {
        return fetch_one(&handlers, user, raw_id).await;
    }

    let status = match params.status.as_deref().map(str::parse::<BookingStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(_)) => return invalid_request_schema(),
    };

    let query = ListBookingsQuery {
        user_id: user.id,
        status,
    };

    match handlers.list_handler.handle(query).await {
        Ok(bookings) => {
            let data: Vec<BookingResponse> = bookings.iter().map(BookingResponse::from).collect();
            success(StatusCode::OK, ApiResponse::ok(data))
        }
        Err(e) => handle_booking_error(e),
    }
}

/// GET /bookings/:bookingId - Get one booking
pub async fn get_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
) -> Response {
    fetch_one(&handlers, user, &booking_id).await
}

/// PUT /bookings/:bookingId - Partially update a booking
pub async fn update_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
    body: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> Response {
    let Ok(booking_id) = booking_id.parse::<BookingId>() else {
        return failure(StatusCode::NOT_FOUND, BOOKING_NOT_FOUND);
    };

    let patch = body
        .map_err(|e| ValidationError::invalid_format("body", e.body_text()))
        .and_then(|Json(req)| req.into_patch());

    let cmd = UpdateBookingCommand {
        booking_id,
        user_id: user.id,
        patch,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(booking) => success(
            StatusCode::OK,
            ApiResponse::ok(BookingResponse::from(&booking))
                .with_message("Booking updated successfully"),
        ),
        Err(e) => handle_booking_error(e),
    }
}

/// DELETE /bookings/:bookingId - Cancel a booking
pub async fn cancel_booking(
    State(handlers): State<BookingHandlers>,
    RequireAuth(user): RequireAuth,
    Path(booking_id): Path<String>,
) -> Response {
    let Ok(booking_id) = booking_id.parse::<BookingId>() else {
        return failure(StatusCode::NOT_FOUND, BOOKING_NOT_FOUND);
    };

    let cmd = CancelBookingCommand {
        booking_id,
        user_id: user.id,
    };

    match handlers.cancel_handler.handle(cmd).await {
        Ok(booking) => success(
            StatusCode::OK,
            ApiResponse::ok(MessageData::new(format!(
                "Booking with ID : {} cancelled successfully",
                booking.id()
            ))),
        ),
        Err(e) => handle_booking_error(e),
    }
}

async fn fetch_one(handlers: &BookingHandlers, user: AuthenticatedUser, raw_id: &str) -> Response {
    let Ok(booking_id) = raw_id.parse::<BookingId>() else {
        return failure(StatusCode::NOT_FOUND, BOOKING_NOT_FOUND);
    };

    let query = GetBookingQuery {
        booking_id,
        user_id: user.id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(booking) => success(StatusCode::OK, ApiResponse::ok(BookingResponse::from(&booking))),
        Err(e) => handle_booking_error(e),
    }
}

async fn summarize(handlers: &BookingHandlers, user: AuthenticatedUser) -> Response {
    let query = SummarizeBookingsQuery {
        user_id: user.id.clone(),
    };

    match handlers.summarize_handler.handle(query).await {
        Ok(summary) => success(
            StatusCode::OK,
            ApiResponse::ok(BookingSummaryResponse::new(&user.id, &summary)),
        ),
        Err(e) => handle_booking_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_booking_error(error: BookingError) -> Response {
    if error.is_invalid_request() {
        tracing::info!(code = %error.code(), "Booking request rejected: {}", error);
    } else if !matches!(error, BookingError::Infrastructure(_)) {
        tracing::debug!(code = %error.code(), "Booking lookup failed: {}", error);
    }

    match error {
        BookingError::NotFound(_) => failure(StatusCode::NOT_FOUND, BOOKING_NOT_FOUND),
        BookingError::Forbidden => failure(StatusCode::FORBIDDEN, BOOKING_NOT_FOUND),
        BookingError::NoBookings => failure(StatusCode::NOT_FOUND, error.to_string()),
        BookingError::Infrastructure(msg) => {
            tracing::error!("Booking operation failed: {}", msg);
            internal_error()
        }
        BookingError::EmptyPatch | BookingError::ValidationFailed(_) => invalid_request_schema(),
        rejected => failure(StatusCode::BAD_REQUEST, rejected.to_string()),
    }
}
