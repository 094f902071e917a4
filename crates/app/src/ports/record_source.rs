//! Record source port: load and save the whole collection at once.

use homedex_domain::device::Device;
use homedex_domain::error::HomeDexError;

/// Result of reading the persisted collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    /// Nothing has been persisted yet. Not an error.
    Missing,
    /// The decoded records, in stored order.
    Records(Vec<Device>),
}

/// Reversible, all-or-nothing persistence of an ordered list of devices.
pub trait RecordSource {
    /// Read every persisted device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::Storage`] when the backing store exists but
    /// cannot be read or decoded.
    fn load(&self) -> Result<Loaded, HomeDexError>;

    /// Overwrite the persisted collection with `devices`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::Storage`] when the backing store cannot be
    /// written.
    fn save(&self, devices: &[Device]) -> Result<(), HomeDexError>;

    /// Human-readable location of the backing store.
    fn describe(&self) -> String;
}
