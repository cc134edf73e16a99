use anyhow::Context;
use clap::Parser;
use pair_finder::utils::logger;
use pair_finder::{CliConfig, DEFAULT_SEQUENCE};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = pair_finder::run(
        config.format,
        &DEFAULT_SEQUENCE,
        &mut stdin.lock(),
        &mut stdout.lock(),
    ) {
        tracing::error!("❌ Lookup failed: {}", e);
        return Err(e).context("failed to process standard input");
    }

    Ok(())
}
