//! Leveled, prefixed console logging.
//! See `bin/logger_demo.rs` for a binary exercising every level.

mod config;
pub use config::*;

mod logger;
pub use logger::*;

mod values;
pub use values::*;
