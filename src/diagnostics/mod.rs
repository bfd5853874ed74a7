//! The crate's own internal events (settings loading, write failures) go
//! through `tracing` on stderr, never through the leveled loggers' stdout.

mod diagnostics;
pub use diagnostics::*;
