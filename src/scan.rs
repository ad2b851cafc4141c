use crate::config::Config;
use crate::registry::Registry;
use anyhow::Context;
use ignore::{DirEntry, WalkBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory names never descended into while looking for repositories.
const SKIPPED_DIRS: [&str; 3] = [".git", "vendor", "node_modules"];

pub fn exec(config: &Config, root: &Path) -> anyhow::Result<()> {
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve scan root {}", root.display()))?;

    println!("Found folders:\n");

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Scanning {}...", root.display()));

    let found = find_repositories_with(&root, &mut |repo| {
        pb.suspend(|| println!("{}", repo.display()));
        pb.tick();
    });
    pb.finish_and_clear();

    Registry::new(config.registry_path())
        .merge(found)
        .context("Failed to update repository registry")?;

    println!("\nSuccessfully added\n");
    Ok(())
}

/// Every directory under `root` (inclusive) that holds a `.git` directory.
pub fn find_repositories(root: &Path) -> Vec<PathBuf> {
    find_repositories_with(root, &mut |_| {})
}

/// Walk `root`, reporting each repository to `on_found` as it is discovered.
/// Unreadable entries are logged and skipped.
pub fn find_repositories_with(root: &Path, on_found: &mut dyn FnMut(&Path)) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry))
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error scanning folders: {e}");
                continue;
            }
        };
        if !is_dir(&entry) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            on_found(entry.path());
            repos.push(entry.into_path());
        }
    }
    repos
}

fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_dir())
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    is_dir(entry)
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
