use crate::config::Config;
use crate::git::GixCommitSource;
use crate::registry::Registry;
use super::{build_grid, render, Aggregator};
use anyhow::Context;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use tracing::debug;

pub fn exec(config: &Config, email: &str) -> anyhow::Result<()> {
    let repos = Registry::new(config.registry_path())
        .load()
        .context("Failed to load repository registry")?;
    debug!(count = repos.len(), "Loaded repository registry");

    let today = Local::now().date_naive();
    let source = GixCommitSource;
    let mut aggregator = Aggregator::new(&source, email, today);
    let alignment = aggregator.alignment();

    let pb = ProgressBar::new(repos.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    for repo in &repos {
        pb.set_message(repo.display().to_string());
        pb.suspend(|| aggregator.add_repository(repo));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let grid = build_grid(&aggregator.finish());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &grid, alignment, today).context("Failed to write heatmap")?;
    out.flush()?;
    Ok(())
}
