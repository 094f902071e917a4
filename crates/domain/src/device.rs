//! Device: a smart home appliance recorded in the catalogue.
//!
//! A [`DeviceDraft`] carries everything the user supplies; the collection
//! store turns it into a [`Device`] by assigning the next [`DeviceId`] and
//! stamping the creation time.

mod kind;
mod protocol;
mod room;

pub use kind::DeviceType;
pub use protocol::ConnectionProtocol;
pub use room::Room;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DeviceId;
use crate::manufacturer::Manufacturer;
use crate::power::Power;
use crate::time::{DATE_FORMAT, Date, Timestamp};

/// A catalogue record.
///
/// `PartialEq` compares every field. Collection membership is decided by
/// [`Device::key`] alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub manufacturer: Manufacturer,
    pub device_type: DeviceType,
    pub room: Room,
    pub power: Power,
    pub price: Decimal,
    pub warranty_years: u32,
    pub protocol: ConnectionProtocol,
    pub installed_on: Date,
    pub active: bool,
    pub features: Vec<String>,
    pub created_at: Timestamp,
}

impl Device {
    /// Assemble a device from user-supplied data plus store-assigned identity.
    #[must_use]
    pub fn from_draft(id: DeviceId, draft: DeviceDraft, created_at: Timestamp) -> Self {
        let DeviceDraft {
            name,
            manufacturer,
            device_type,
            room,
            power,
            price,
            warranty_years,
            protocol,
            installed_on,
            active,
            features,
        } = draft;
        Self {
            id,
            name,
            manufacturer,
            device_type,
            room,
            power,
            price,
            warranty_years,
            protocol,
            installed_on,
            active,
            features,
            created_at,
        }
    }

    /// Identity of this record within a collection.
    #[must_use]
    pub fn key(&self) -> DeviceId {
        self.id
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.manufacturer;
        writeln!(f, "Device #{} \"{}\"", self.id, self.name)?;
        writeln!(f, "  type:         {}", self.device_type)?;
        write!(
            f,
            "  manufacturer: {} ({}, founded {}, {} employees",
            m.name, m.country, m.founded, m.employees
        )?;
        match &m.website {
            Some(website) => writeln!(f, ", {website})")?,
            None => writeln!(f, ")")?,
        }
        writeln!(f, "  room:         {}", self.room)?;
        writeln!(f, "  power:        {}", self.power)?;
        writeln!(f, "  price:        {}", self.price)?;
        writeln!(f, "  protocol:     {}", self.protocol)?;
        writeln!(f, "  installed:    {}", self.installed_on.format(DATE_FORMAT))?;
        writeln!(f, "  active:       {}", if self.active { "yes" } else { "no" })?;
        writeln!(f, "  warranty:     {} year(s)", self.warranty_years)?;
        if self.features.is_empty() {
            writeln!(f, "  features:     none")?;
        } else {
            writeln!(f, "  features:     {}", self.features.join(", "))?;
        }
        write!(f, "  created at:   {}", self.created_at.to_rfc3339())
    }
}

/// User-supplied device data, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDraft {
    pub name: String,
    pub manufacturer: Manufacturer,
    pub device_type: DeviceType,
    pub room: Room,
    pub power: Power,
    pub price: Decimal,
    pub warranty_years: u32,
    pub protocol: ConnectionProtocol,
    pub installed_on: Date,
    pub active: bool,
    pub features: Vec<String>,
}

impl DeviceDraft {
    /// Create a builder for constructing a [`DeviceDraft`].
    #[must_use]
    pub fn builder() -> DeviceDraftBuilder {
        DeviceDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`DeviceDraft`].
///
/// Power, price, and warranty default to zero, `active` to `true`, and
/// features to an empty list.
#[derive(Debug, Default)]
pub struct DeviceDraftBuilder {
    name: Option<String>,
    manufacturer: Option<Manufacturer>,
    device_type: Option<DeviceType>,
    room: Option<Room>,
    power: Option<Power>,
    price: Option<Decimal>,
    warranty_years: Option<u32>,
    protocol: Option<ConnectionProtocol>,
    installed_on: Option<Date>,
    active: Option<bool>,
    features: Vec<String>,
}

impl DeviceDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, manufacturer: Manufacturer) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }

    #[must_use]
    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    #[must_use]
    pub fn power(mut self, power: Power) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn warranty_years(mut self, years: u32) -> Self {
        self.warranty_years = Some(years);
        self
    }

    #[must_use]
    pub fn protocol(mut self, protocol: ConnectionProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    #[must_use]
    pub fn installed_on(mut self, date: Date) -> Self {
        self.installed_on = Some(date);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    #[must_use]
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Consume the builder, validate, and return a [`DeviceDraft`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if a field without a default
    /// was never set, or [`ValidationError::EmptyName`] if the name is blank.
    pub fn build(self) -> Result<DeviceDraft, ValidationError> {
        let draft = DeviceDraft {
            name: self.name.ok_or(ValidationError::MissingField("name"))?,
            manufacturer: self
                .manufacturer
                .ok_or(ValidationError::MissingField("manufacturer"))?,
            device_type: self
                .device_type
                .ok_or(ValidationError::MissingField("device_type"))?,
            room: self.room.ok_or(ValidationError::MissingField("room"))?,
            power: self.power.unwrap_or(Power::ZERO),
            price: self.price.unwrap_or(Decimal::ZERO),
            warranty_years: self.warranty_years.unwrap_or_default(),
            protocol: self
                .protocol
                .ok_or(ValidationError::MissingField("protocol"))?,
            installed_on: self
                .installed_on
                .ok_or(ValidationError::MissingField("installed_on"))?,
            active: self.active.unwrap_or(true),
            features: self.features,
        };
        draft.validate()?;
        Ok(draft)
    }
}
