//! # homedex-adapter-console
//!
//! Line-oriented terminal adapter.
//!
//! ## Responsibilities
//! - Implement `CommandInput`: print the prompt and read one command line
//! - Implement `DeviceReader`: ask for every device field in turn, re-asking
//!   until the answer parses and satisfies the domain invariants
//! - Answer one-off questions for the composition root (e.g. the data file)
//!
//! ## Dependency rule
//! Depends on `homedex-app` (for port traits) and `homedex-domain` (for domain types).
//! Generic over `BufRead`/`Write`, so tests drive it with in-memory buffers.

pub mod console;
pub mod error;

pub use console::Console;
pub use error::ConsoleError;
