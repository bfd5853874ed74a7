use super::Cli;
use crate::level::Threshold;
use crate::sink::CallSite;
use crate::style::ColorMode;
use anyhow::{Result, anyhow};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Log {
    pub level: Threshold,
    pub color: ColorMode,
    pub call_site: CallSite,
    pub utc: bool,
    pub microseconds: bool,
    pub filter: String, // diagnostics only, see `crate::diagnostics`
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Threshold::default(),
            color: ColorMode::default(),
            call_site: CallSite::default(),
            utc: false,
            microseconds: false,
            filter: "warn".to_string(),
        }
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

const ENV_PREFIX: &str = "LVLOG";

/// Loads from `path`, or from the build profile's default file if it exists.
/// An explicit path must exist.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let settings: Settings = builder(path)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

/// Like [`parse_settings`], with command-line values taking precedence over
/// the environment (`LVLOG_LOG__LEVEL`, ...), which takes precedence over
/// the file.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings: Settings = builder(cli.settings.as_deref())
        .set_override_option("log.level", cli.log_level.map(|level| i64::from(level.0)))
        .map_err(|e| anyhow!(e))?
        .set_override_option("log.color", cli.color.map(color_mode_name))
        .map_err(|e| anyhow!(e))?
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

fn builder(path: Option<&str>) -> ConfigBuilder<DefaultState> {
    let file = match path {
        Some(path) => File::with_name(path).required(true),
        None => File::with_name(SETTINGS_PATH).required(false),
    };

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
}

fn color_mode_name(mode: ColorMode) -> &'static str {
    match mode {
        ColorMode::Auto => "auto",
        ColorMode::Always => "always",
        ColorMode::Never => "never",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(parse_settings(Some("")).is_err());
        assert!(parse_settings(Some("settings/does-not-exist.toml")).is_err());
    }

    #[test]
    fn reads_every_key() {
        let file = settings_file(
            r#"
            [log]
            level = 3
            color = "never"
            call_site = "long"
            utc = true
            microseconds = true
            filter = "lvlog=debug"
            "#,
        );
        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.log.level, Threshold::ERROR);
        assert_eq!(settings.log.color, ColorMode::Never);
        assert_eq!(settings.log.call_site, CallSite::Long);
        assert!(settings.log.utc);
        assert!(settings.log.microseconds);
        assert_eq!(settings.log.filter, "lvlog=debug");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let file = settings_file("[log]\nlevel = \"warn\"\n");
        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.log.level, Threshold::WARN);
        assert_eq!(settings.log.color, ColorMode::Auto);
        assert_eq!(settings.log.call_site, CallSite::Short);
        assert_eq!(settings.log.filter, "warn");
    }

    #[test]
    fn out_of_range_level_is_kept() {
        let file = settings_file("[log]\nlevel = -4\n");
        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.log.level, Threshold(-4));
    }

    #[test]
    fn command_line_overrides_file() {
        let file = settings_file("[log]\nlevel = 3\ncolor = \"always\"\n");
        let cli = Cli {
            settings: file.path().to_str().map(String::from),
            log_level: Some(Threshold::DEBUG),
            color: Some(ColorMode::Never),
        };
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.log.level, Threshold::DEBUG);
        assert_eq!(settings.log.color, ColorMode::Never);

        let cli = Cli {
            log_level: None,
            color: None,
            ..cli
        };
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.log.level, Threshold::ERROR);
        assert_eq!(settings.log.color, ColorMode::Always);
    }
}
