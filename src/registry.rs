use crate::error::{GitstatsError, Result};
use crate::model::RepoSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Line-oriented file listing every repository root found by `scan`.
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registered repositories.
    ///
    /// A missing file is created empty. An unreadable file is reported and
    /// treated as if nothing had been registered yet.
    pub fn load(&self) -> Result<RepoSet> {
        match self.read()? {
            Some(repos) => Ok(repos),
            None => Ok(RepoSet::new()),
        }
    }

    /// `None` when the file exists but cannot be read.
    fn read(&self) -> Result<Option<RepoSet>> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(parse(&contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.save(&RepoSet::new())?;
                Ok(Some(RepoSet::new()))
            }
            Err(e) => {
                warn!("Could not read registry {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    pub fn save(&self, repos: &RepoSet) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = repos
            .iter()
            .map(|p| path_to_bytes(p))
            .collect::<Vec<_>>()
            .join(&b'\n');
        fs::write(&self.path, contents).map_err(|e| {
            GitstatsError::Registry(format!("Failed to write {}: {e}", self.path.display()))
        })
    }

    /// Union `found` into the stored set and persist the result.
    ///
    /// An existing registry that cannot be read is left untouched.
    pub fn merge<I: IntoIterator<Item = PathBuf>>(&self, found: I) -> Result<RepoSet> {
        let mut repos = self.read()?.ok_or_else(|| {
            GitstatsError::Registry(format!(
                "Refusing to overwrite unreadable registry {}",
                self.path.display()
            ))
        })?;
        let before = repos.len();
        repos.extend(found);
        self.save(&repos)?;
        info!(
            added = repos.len() - before,
            total = repos.len(),
            "Registry updated"
        );
        Ok(repos)
    }
}

fn parse(contents: &[u8]) -> RepoSet {
    contents
        .split(|&b| b == b'\n')
        .map(trim_ascii)
        .filter(|line| !line.is_empty())
        .map(bytes_to_path)
        .collect()
}

fn trim_ascii(line: &[u8]) -> &[u8] {
    let start = line.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(start, |i| i + 1);
    &line[start..end]
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(unix)]
fn path_to_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

#[cfg(not(unix))]
fn path_to_bytes(path: &Path) -> Vec<u8> {
    path.to_string_lossy().into_owned().into_bytes()
}
