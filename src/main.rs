use clap::Parser;
use trackroute::cli::{run_cli, Cli};
use trackroute::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
