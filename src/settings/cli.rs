use super::Parser;
use crate::level::Threshold;
use crate::style::ColorMode;

#[derive(Parser, Debug, Default)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,

    /// Default threshold for new loggers: a severity name or an integer code
    /// (debug=0, info=1, warn=2, error=3, fatal=4).
    #[arg(long = "log-level", alias = "log_level", allow_hyphen_values = true)]
    pub log_level: Option<Threshold>,

    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}
