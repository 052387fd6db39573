use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = tabdeck::cli::Cli::parse();
    // Routes all log::info!() etc. to the debug log file.
    // --log-level takes precedence over DEBUG_LEVEL.
    tabdeck::debug::init_log_bridge(cli.log_level);

    log::info!("Starting tabdeck {}", tabdeck::VERSION);
    let result = tabdeck::cli::run(cli);
    if let Err(e) = &result {
        log::error!("tabdeck failed: {:#}", e);
    }
    result
}
