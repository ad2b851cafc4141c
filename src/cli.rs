use crate::config::{Config, SystemPaths};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitstats")]
#[command(about = "Scan for local git repositories and chart your commit activity over the last six months")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan for Git repositories
    Scan {
        #[arg(help = "Directory path to scan for Git repositories")]
        path: PathBuf,
    },
    /// Show commit statistics
    Stats {
        #[arg(help = "Git email address to track commits for")]
        email: String,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = Config::resolve(&SystemPaths).context("Failed to resolve configuration")?;
        match self.command {
            Commands::Scan { path } => crate::scan::exec(&config, &path),
            Commands::Stats { email } => crate::heat::exec(&config, &email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_both_subcommands() {
        let cli = Cli::try_parse_from(["gitstats", "stats", "x@example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats { ref email } if email == "x@example.com"));

        let cli = Cli::try_parse_from(["gitstats", "scan", "/tmp"]).unwrap();
        assert!(matches!(cli.command, Commands::Scan { ref path } if path == Path::new("/tmp")));
    }

    #[test]
    fn stats_requires_an_email() {
        assert!(Cli::try_parse_from(["gitstats", "stats"]).is_err());
    }
}
