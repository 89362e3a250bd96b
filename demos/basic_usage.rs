//! Basic usage of rust_penlog

use rust_penlog::prelude::*;
use rust_penlog::{global, info, warning};

fn main() -> Result<()> {
    // Configuration normally comes from the environment.
    let config = LoggerConfig::from_env()?;
    let logger = Logger::builder()
        .config(config)
        .component("demo")
        .output_mode(OutputMode::HumanFull)
        .show_colors(true)
        .show_tags(true)
        .build()?;

    logger.preamble("demo starting")?;
    logger.read_tagged(["uart"], "AT\r")?;
    logger.write_tagged(["uart"], "OK\r")?;
    info!(logger, "processed {} frames", 42)?;
    warning!(logger, tags: ["retry"], "attempt {} of {}", 2, 3)?;
    logger.summary("done")?;

    // The process-wide default logger writes tiny human output to stderr.
    global::notice("default logger says hi")?;

    Ok(())
}
