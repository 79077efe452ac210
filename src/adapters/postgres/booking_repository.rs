//! PostgreSQL implementation of BookingRepository.
//!
//! Persists Booking aggregates to the `bookings` table. Updates are plain
//! overwrites with no version check.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::BookingRepository;

/// PostgreSQL implementation of BookingRepository.
#[derive(Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, user_id, car_name, days, rent_per_day, total_cost, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id().as_uuid())
        .bind(booking.user_id().as_str())
        .bind(booking.car_name())
        .bind(days_to_db(booking.days())?)
        .bind(booking.rent_per_day())
        .bind(booking.total_cost())
        .bind(booking.status().as_str())
        .bind(booking.created_at().as_datetime())
        .bind(booking.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert booking: {}", e)))?;

        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE bookings SET
                car_name = $2,
                days = $3,
                rent_per_day = $4,
                total_cost = $5,
                status = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(booking.id().as_uuid())
        .bind(booking.car_name())
        .bind(days_to_db(booking.days())?)
        .bind(booking.rent_per_day())
        .bind(booking.total_cost())
        .bind(booking.status().as_str())
        .bind(booking.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update booking: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, car_name, days, rent_per_day, total_cost, status,
                   created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch booking: {}", e)))?;

        row.map(row_to_booking).transpose()
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, car_name, days, rent_per_day, total_cost, status,
                   created_at, updated_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch bookings by user: {}", e)))?;

        rows.into_iter().map(row_to_booking).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn days_to_db(days: u32) -> Result<i32, DomainError> {
    i32::try_from(days).map_err(|_| DomainError::database(format!("days out of range: {}", days)))
}

fn column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

fn row_to_booking(row: sqlx::postgres::PgRow) -> Result<Booking, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let car_name: String = column(&row, "car_name")?;
    let days: i32 = column(&row, "days")?;
    let rent_per_day: f64 = column(&row, "rent_per_day")?;
    let total_cost: f64 = column(&row, "total_cost")?;
    let status: String = column(&row, "status")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    let days = u32::try_from(days)
        .map_err(|_| DomainError::database(format!("Invalid days value: {}", days)))?;
    let status = status
        .parse()
        .map_err(|e| DomainError::database(format!("Invalid booking status: {}", e)))?;
    let user_id = UserId::new(user_id)
        .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?;

    Ok(Booking::reconstitute(
        BookingId::from_uuid(id),
        user_id,
        car_name,
        days,
        rent_per_day,
        total_cost,
        status,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_fit_in_integer_column() {
        assert_eq!(days_to_db(365).unwrap(), 365);
        assert!(days_to_db(u32::MAX).is_err());
    }
}
