pub mod diagnostics;
pub mod level;
pub mod logger;
pub mod settings;
pub mod sink;
pub mod style;
pub mod testing;

mod macros;

pub use level::{Severity, Threshold};
pub use logger::{LeveledLogger, LoggerConfig};
pub use style::{Color, Style};
