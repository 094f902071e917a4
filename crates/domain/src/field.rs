//! Fields that support distinct-value queries.

use std::fmt;
use std::str::FromStr;

use crate::device::Device;
use crate::error::UnsupportedFieldError;

/// Whitelisted device field for `print_unique_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceField {
    DeviceType,
    Room,
    Protocol,
    /// The embedded manufacturer's name.
    Manufacturer,
}

impl DeviceField {
    /// Every supported field, in the order they are advertised.
    pub const ALL: &'static [Self] = &[
        Self::DeviceType,
        Self::Room,
        Self::Protocol,
        Self::Manufacturer,
    ];

    /// Name the user types to select this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeviceType => "devicetype",
            Self::Room => "room",
            Self::Protocol => "protocol",
            Self::Manufacturer => "manufacturer",
        }
    }

    /// Comma-separated list of every accepted name.
    #[must_use]
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render this field's value for `device`.
    #[must_use]
    pub fn value_of(self, device: &Device) -> String {
        match self {
            Self::DeviceType => device.device_type.to_string(),
            Self::Room => device.room.to_string(),
            Self::Protocol => device.protocol.to_string(),
            Self::Manufacturer => device.manufacturer.name.clone(),
        }
    }
}

impl fmt::Display for DeviceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceField {
    type Err = UnsupportedFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devicetype" | "device_type" => Ok(Self::DeviceType),
            "room" => Ok(Self::Room),
            "protocol" | "connectionprotocol" | "connection_protocol" => Ok(Self::Protocol),
            "manufacturer" | "manufacturer.name" => Ok(Self::Manufacturer),
            _ => Err(UnsupportedFieldError {
                field: s.to_string(),
            }),
        }
    }
}
