//! Manufacturer: the company behind a device.
//!
//! A manufacturer has no identity of its own: each [`Device`](crate::device::Device)
//! owns a copy, and two devices from the same company hold independent values.

use serde::{Deserialize, Serialize};

use crate::choice::define_choice;

define_choice!(
    /// Country a manufacturer is headquartered in.
    Country, "country" {
        Usa => "USA",
        China => "CHINA",
        Germany => "GERMANY",
        Japan => "JAPAN",
        SouthKorea => "SOUTH_KOREA",
        Netherlands => "NETHERLANDS",
        Sweden => "SWEDEN",
        UnitedKingdom => "UNITED_KINGDOM",
    }
);

/// Company information embedded in a device record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    pub country: Country,
    /// Year the company was founded.
    pub founded: i32,
    /// Head count; not validated.
    pub employees: i64,
    pub website: Option<String>,
}

impl Manufacturer {
    /// Create a manufacturer without a website.
    #[must_use]
    pub fn new(name: impl Into<String>, country: Country, founded: i32, employees: i64) -> Self {
        Self {
            name: name.into(),
            country,
            founded,
            employees,
            website: None,
        }
    }

    /// Attach a website. Blank input clears it.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        let website = website.into();
        self.website = if website.trim().is_empty() {
            None
        } else {
            Some(website)
        };
        self
    }
}
