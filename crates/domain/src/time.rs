//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp used for `created_at` and store initialization time.
pub type Timestamp = DateTime<Utc>;

/// Calendar date without a time zone, used for installation dates.
pub type Date = NaiveDate;

/// Format accepted and produced for [`Date`] values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
