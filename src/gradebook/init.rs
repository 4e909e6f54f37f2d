use crate::api::{CmdResult, GradebookApi, GradebookPaths};
use crate::config::GradebookConfig;
use crate::error::{GradebookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct GradebookContext {
    pub api: GradebookApi<FileStore>,
    pub config: GradebookConfig,
    /// Messages produced while loading the data file.
    pub load_result: CmdResult,
}

/// Where settings live unless overridden: the platform config dir
/// (e.g. `~/.config/gradebook` on Linux).
pub fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "gradebook", "gradebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GradebookError::Config("Could not determine config dir".to_string()))
}

/// Resolves config and data file, then opens the session.
///
/// `data_file` takes precedence over the configured path. A config file that
/// cannot be read falls back to defaults.
pub fn initialize(
    cwd: &Path,
    config_dir: Option<PathBuf>,
    data_file: Option<PathBuf>,
) -> Result<GradebookContext> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let config = GradebookConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        GradebookConfig::default()
    });

    let data_file = match data_file {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => config.data_path(cwd),
    };
    tracing::debug!(data_file = %data_file.display(), config_dir = %config_dir.display(), "initializing");

    let store = FileStore::new(&data_file);
    let paths = GradebookPaths {
        config_dir,
        data_file,
    };
    let (api, load_result) = GradebookApi::open(store, paths);

    Ok(GradebookContext {
        api,
        config,
        load_result,
    })
}
