//! Partial update of a booking.

use crate::domain::foundation::BookingStatus;

/// Fields a caller may change on an existing booking.
///
/// `None` means "leave as is". The request validator produces this after
/// bounds checks; the aggregate re-checks bounds before applying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingPatch {
    pub car_name: Option<String>,
    pub days: Option<u32>,
    pub rent_per_day: Option<f64>,
    pub status: Option<BookingStatus>,
}

impl BookingPatch {
    /// A patch that only changes the status.
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True if no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.car_name.is_none()
            && self.days.is_none()
            && self.rent_per_day.is_none()
            && self.status.is_none()
    }

    /// True if the patch touches car name, days or daily rent.
    pub fn touches_details(&self) -> bool {
        self.car_name.is_some() || self.days.is_some() || self.rent_per_day.is_some()
    }

    /// True if the patch changes an input of the total cost.
    pub fn touches_cost(&self) -> bool {
        self.days.is_some() || self.rent_per_day.is_some()
    }
}
