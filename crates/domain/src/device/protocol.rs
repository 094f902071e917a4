//! Connection protocol: how a device talks to the rest of the home.

use crate::choice::define_choice;

define_choice!(
    /// Radio or network protocol a device connects with.
    ConnectionProtocol, "connection protocol" {
        Wifi => "WIFI",
        Bluetooth => "BLUETOOTH",
        Zigbee => "ZIGBEE",
        ZWave => "Z_WAVE",
        Thread => "THREAD",
    }
);
