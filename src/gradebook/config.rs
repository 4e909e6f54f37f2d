use crate::error::{GradebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "grades.txt";
const DEFAULT_DECIMALS: usize = 2;
pub const MAX_DECIMALS: usize = 6;

/// Configuration for gradebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradebookConfig {
    /// Data file holding the records. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Decimal places used when displaying averages
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl GradebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GradebookError::Io)?;
        let config: GradebookConfig =
            serde_json::from_str(&content).map_err(GradebookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GradebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GradebookError::Serialization)?;
        fs::write(config_path, content).map_err(GradebookError::Io)?;
        Ok(())
    }

    /// Resolves the data file against `cwd` when it is relative.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }

    /// Keys accepted by [`get`](Self::get) and [`set`](Self::set), in display order.
    pub const KEYS: [&'static str; 2] = ["data-file", "decimals"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "decimals" => Some(self.decimals.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => self.set_data_file(value),
            "decimals" => self.set_decimals(value),
            _ => Err(GradebookError::Config(format!("Unknown config key: {}", key))),
        }
    }

    pub fn set_decimals(&mut self, value: &str) -> Result<()> {
        let decimals: usize = value
            .trim()
            .parse()
            .map_err(|_| GradebookError::Config(format!("decimals must be a number, got '{}'", value)))?;
        if decimals > MAX_DECIMALS {
            return Err(GradebookError::Config(format!(
                "decimals must be at most {}",
                MAX_DECIMALS
            )));
        }
        self.decimals = decimals;
        Ok(())
    }

    pub fn set_data_file(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(GradebookError::Config("data-file cannot be empty".to_string()));
        }
        self.data_file = PathBuf::from(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("grades.txt"));
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = GradebookConfig::load(temp.path().join("absent")).unwrap();
        assert_eq!(config, GradebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let mut config = GradebookConfig::default();
        config.set_data_file("records/class-a.txt").unwrap();
        config.set_decimals("3").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = GradebookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"decimals": 1}"#).unwrap();

        let loaded = GradebookConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.decimals, 1);
        assert_eq!(loaded.data_file, PathBuf::from("grades.txt"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            GradebookConfig::load(temp.path()),
            Err(GradebookError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_decimals_validation() {
        let mut config = GradebookConfig::default();
        assert!(config.set_decimals("x").is_err());
        assert!(config.set_decimals("7").is_err());
        assert_eq!(config.decimals, 2);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = GradebookConfig::default();
        assert_eq!(config.get("data-file").as_deref(), Some("grades.txt"));
        assert_eq!(config.get("decimals").as_deref(), Some("2"));
        assert_eq!(config.get("colour"), None);

        config.set("decimals", "4").unwrap();
        assert_eq!(config.decimals, 4);
        assert!(config.set("colour", "red").is_err());
    }

    #[test]
    fn test_data_path_resolution() {
        let config = GradebookConfig::default();
        let cwd = Path::new("/work");
        assert_eq!(config.data_path(cwd), PathBuf::from("/work/grades.txt"));

        let mut absolute = GradebookConfig::default();
        absolute.set_data_file("/srv/grades.txt").unwrap();
        assert_eq!(absolute.data_path(cwd), PathBuf::from("/srv/grades.txt"));
    }
}
