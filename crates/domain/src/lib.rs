//! # homedex-domain
//!
//! Pure domain model for the homedex device catalogue.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (catalogue records keyed by a numeric id)
//! - Define **Manufacturers** (value objects owned by the device that embeds them)
//! - Define the closed vocabularies: device types, rooms, protocols, countries
//! - Define the whitelist of fields that support distinct-value queries
//! - Contain all invariant enforcement (e.g. non-negative power draw)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

mod choice;

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod field;
pub mod manufacturer;
pub mod power;
