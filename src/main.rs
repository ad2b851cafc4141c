use anyhow::Result;
use clap::Parser;
use gitstats::cli::Cli;

fn main() -> Result<()> {
    gitstats::logging::init_logging();
    let cli = Cli::parse();
    cli.execute()
}
