use lvlog::settings::*;

fn main() {
    // Load settings from the default location
    let project_settings = parse_settings(None).unwrap();
    println!("Loaded settings: {:?}", project_settings);

    // Attempt to load from an invalid path (expected to fail)
    let is_err = parse_settings(Some("")).is_err();
    println!("Error on invalid path: {:?}", is_err);

    // Merge a custom file, the environment and flags
    // $ LVLOG_LOG__UTC=true cargo run --bin settings_demo -- --settings=settings/release.toml --log-level=warn
    let cli = Cli::parse();
    let project_settings = load_settings(&cli).unwrap();
    println!("Loaded settings: {:?}", project_settings);
}
