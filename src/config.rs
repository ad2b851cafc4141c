use crate::error::{GitstatsError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the registry file location.
pub const REGISTRY_ENV: &str = "GITSTATS_REGISTRY";

/// Source of the filesystem locations the tool persists to.
///
/// Production code uses [`SystemPaths`], which points at a per-user file.
/// Tests use [`FixedPaths`] with a temp directory for isolation.
pub trait PathProvider {
    fn registry_path(&self) -> Result<PathBuf>;
}

/// Resolves the registry from `GITSTATS_REGISTRY`, falling back to the
/// platform location (`%LOCALAPPDATA%\gitstats` on Windows,
/// `~/.gitlocalstats` elsewhere).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPaths;

impl PathProvider for SystemPaths {
    fn registry_path(&self) -> Result<PathBuf> {
        if let Some(path) = env::var_os(REGISTRY_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        if cfg!(windows) {
            let base = dirs::data_local_dir().ok_or_else(|| {
                GitstatsError::Config("Local application data directory not found".to_string())
            })?;
            Ok(base.join("gitstats"))
        } else {
            let home = dirs::home_dir()
                .ok_or_else(|| GitstatsError::Config("Home directory not found".to_string()))?;
            Ok(home.join(".gitlocalstats"))
        }
    }
}

#[derive(Debug, Clone)]
pub struct FixedPaths(pub PathBuf);

impl PathProvider for FixedPaths {
    fn registry_path(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// Settings resolved once at startup and handed to each command.
#[derive(Debug, Clone)]
pub struct Config {
    registry_path: PathBuf,
}

impl Config {
    pub fn resolve(paths: &dyn PathProvider) -> Result<Self> {
        Ok(Self {
            registry_path: paths.registry_path()?,
        })
    }

    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_are_used_verbatim() {
        let config = Config::resolve(&FixedPaths(PathBuf::from("/tmp/registry"))).unwrap();
        assert_eq!(config.registry_path(), Path::new("/tmp/registry"));
    }

    #[test]
    fn system_paths_resolve_to_a_file_name() {
        let path = SystemPaths.registry_path().unwrap();
        assert!(path.file_name().is_some());
    }
}
