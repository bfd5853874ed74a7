use lvlog::Threshold;
use lvlog::settings::{Cli, load_settings};
use std::io::Write;

fn set_env(key: &str, value: &str) {
    // SAFETY: this binary holds a single test, so no other thread reads the
    // environment concurrently.
    unsafe { std::env::set_var(key, value) }
}

fn remove_env(key: &str) {
    // SAFETY: see `set_env`.
    unsafe { std::env::remove_var(key) }
}

#[test]
fn command_line_beats_environment_beats_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(b"[log]\nlevel = 3\nutc = false\n").unwrap();
    let cli = Cli {
        settings: file.path().to_str().map(String::from),
        ..Cli::default()
    };

    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.log.level, Threshold::ERROR);
    assert!(!settings.log.utc);

    set_env("LVLOG_LOG__LEVEL", "warn");
    set_env("LVLOG_LOG__UTC", "true");
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.log.level, Threshold::WARN);
    assert!(settings.log.utc);

    set_env("LVLOG_LOG__LEVEL", "-2");
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.log.level, Threshold(-2));

    let overridden = Cli {
        settings: cli.settings.clone(),
        log_level: Some(Threshold::DEBUG),
        color: None,
    };
    let settings = load_settings(&overridden).unwrap();
    assert_eq!(settings.log.level, Threshold::DEBUG);
    assert!(settings.log.utc);

    remove_env("LVLOG_LOG__LEVEL");
    remove_env("LVLOG_LOG__UTC");
    let settings = load_settings(&cli).unwrap();
    assert_eq!(settings.log.level, Threshold::ERROR);
    assert!(!settings.log.utc);
}
