use serde::Deserialize;

/// When escape codes are written for styled prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide from the terminal and `NO_COLOR`/`CLICOLOR*`.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Process-wide: `colored` keeps a single override.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
        tracing::debug!(mode = ?self, "color mode applied");
    }
}
