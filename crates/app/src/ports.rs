//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the session layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod console;
pub mod record_source;
pub mod script_source;

pub use console::{CommandInput, DeviceReader};
pub use record_source::{Loaded, RecordSource};
pub use script_source::ScriptSource;
