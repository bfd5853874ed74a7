use lvlog::diagnostics::*;
use lvlog::logger::*;
use lvlog::settings::*;
use lvlog::{Severity, Style};

/// Writes MESSAGE as one leveled line on stdout. A fatal message exits with
/// status 1 once written.
#[derive(Parser, Debug)]
#[command(name = "lvlog")]
struct Args {
    #[command(flatten)]
    cli: Cli,

    #[arg(long, default_value = "lvlog")]
    prefix: String,

    /// e.g. `cyan+bold`, `red+on_white`
    #[arg(long)]
    style: Option<Style>,

    #[arg(long, default_value = "info")]
    severity: Severity,

    #[arg(required = true)]
    message: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let diagnostics = Diagnostics::new_bootstrap()?;

    let settings = load_settings(&args.cli)?;
    diagnostics.reload_from_config(&DiagnosticsConfig::from(&settings.log))?;
    settings.log.color.apply();

    let config = LoggerConfig::from_settings(&settings.log);
    let logger = config.new_logger(args.prefix, args.style.unwrap_or_default());
    tracing::debug!(threshold = %logger.threshold(), severity = %args.severity, "emitting");

    let message = args.message.join(" ");
    logger.log(args.severity, format_args!("{message}"));

    Ok(())
}
