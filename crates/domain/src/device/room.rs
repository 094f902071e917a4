//! Room: where in the home a device is installed.

use crate::choice::define_choice;

define_choice!(
    /// Room a device is installed in.
    Room, "room" {
        LivingRoom => "LIVING_ROOM",
        Bedroom => "BEDROOM",
        Kitchen => "KITCHEN",
        Bathroom => "BATHROOM",
        Garage => "GARAGE",
        Garden => "GARDEN",
    }
);
