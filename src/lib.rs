//! Turn Go test names into readable sentences.
//!
//! ```
//! assert_eq!(gotestdox::prettify("TestParseJSON"), "Parse JSON");
//! ```

pub mod casing;
pub mod cli;
pub mod config;
pub mod prettifier;
pub mod trace;

pub use config::Config;
pub use prettifier::{prettify, prettify_with_trace};
pub use trace::{debug_enabled, reset_debug_writer, set_debug_writer, DebugWriter, DEBUG_ENV};
