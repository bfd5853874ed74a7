//! Application settings: a TOML file, `LVLOG_*` environment variables and
//! command-line flags, merged in that order.
//! See `bin/settings_demo.rs` for a binary printing the merged result.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
