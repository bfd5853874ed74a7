//! Presentation of the logger prefix. Message bodies are never styled.

mod color_mode;
pub use color_mode::*;

mod style;
pub use style::*;

pub use colored::Color;
