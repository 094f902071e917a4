//! # homedex-adapter-file
//!
//! Filesystem adapter.
//!
//! ## Responsibilities
//! - Implement `RecordSource` over a single JSON document (`JsonFileSource`)
//! - Implement `ScriptSource` over plain text files (`FsScriptSource`)
//! - Map IO and encoding failures into typed `FileError`s
//!
//! ## Dependency rule
//! Depends on `homedex-app` (for port traits) and `homedex-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod json_source;
pub mod script_source;

pub use error::FileError;
pub use json_source::JsonFileSource;
pub use script_source::FsScriptSource;
