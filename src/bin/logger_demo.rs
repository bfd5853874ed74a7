use lvlog::logger::*;
use lvlog::{Color, Severity, Style};
use std::sync::Arc;
use std::thread;

fn main() -> anyhow::Result<()> {
    let config = LoggerConfig::stdout(Severity::Debug);
    let logger = config.new_logger("demo", Style::new().fg(Color::Cyan).bold());

    lvlog::debug!(logger, "bootstrap debug log");
    lvlog::info!(logger, "bootstrap info log");
    lvlog::warn!(logger, "disk low: {}%", 87);
    lvlog::error!(logger; "conn lost", 3, "retries");

    logger.set_threshold(Severity::Warn);
    logger.info("suppressed, never printed");
    logger.warn("still printed");

    logger.set_style(Style::new().fg(Color::Red).bg(Color::White));
    logger.errorf(format_args!("restyled prefix, threshold={}", logger.threshold()));

    let shared = Arc::new(config.new_logger("worker", Style::new().fg(Color::Green)));
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let logger = shared.clone();
            thread::spawn(move || lvlog::info!(logger, "worker {id} done"))
        })
        .collect();
    for handle in handles {
        handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }

    // Raising the threshold above fatal turns this into a no-op.
    logger.set_threshold(5);
    lvlog::fatal!(logger, "not reached");
    logger.set_threshold(Severity::Fatal);
    lvlog::fatal!(logger, "exiting with status 1");

    Ok(())
}
