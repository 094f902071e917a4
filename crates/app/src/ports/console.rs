//! Console ports: where command lines and new device records come from.

use homedex_domain::device::DeviceDraft;
use homedex_domain::error::HomeDexError;

/// Produces one validated device draft, however the input is sourced.
pub trait DeviceReader {
    /// Read the fields of a single device.
    ///
    /// # Errors
    ///
    /// Returns an error when input ends or cannot be read before a complete,
    /// valid draft was collected.
    fn read_device(&mut self) -> Result<DeviceDraft, HomeDexError>;
}

/// Supplies raw command lines to the interactive session loop.
pub trait CommandInput {
    /// Read the next command line, or `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDexError::Storage`] when the input cannot be read.
    fn read_command(&mut self) -> Result<Option<String>, HomeDexError>;
}
