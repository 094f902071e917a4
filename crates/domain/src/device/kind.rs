//! Device type: what kind of appliance a record describes.

use crate::choice::define_choice;

define_choice!(
    /// Category of a smart home device.
    DeviceType, "device type" {
        Light => "LIGHT",
        Thermostat => "THERMOSTAT",
        SecurityCamera => "SECURITY_CAMERA",
        Speaker => "SPEAKER",
        Lock => "LOCK",
        Sensor => "SENSOR",
        Plug => "PLUG",
    }
);
