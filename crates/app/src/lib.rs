//! # homedex-app
//!
//! Application layer: the collection store, the command dispatcher, and the
//! **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `RecordSource`: load and save the whole collection
//!   - `DeviceReader`: produce one validated device draft
//!   - `CommandInput`: supply command lines to the interactive loop
//!   - `ScriptSource`: resolve script files to their lines
//! - Hold the in-memory `DeviceStore` with its id counter
//! - Parse command lines into typed `Command`s
//! - Drive a `Session`: dispatch commands, replay scripts, report failures
//!
//! ## Dependency rule
//! Depends on `homedex-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod dispatcher;
pub mod ports;
pub mod session;
pub mod store;

#[cfg(test)]
mod fakes;
