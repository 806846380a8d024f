use anyhow::Context;
use bom_planner::utils::logger;
use bom_planner::{CliConfig, Shell};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bom-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run().context("shell I/O failed")?;

    tracing::info!(
        components = shell.components().count(),
        boms = shell.boms().count(),
        "Session finished"
    );
    Ok(())
}
