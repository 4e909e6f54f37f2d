use crate::commands::{CmdMessage, CmdResult, GradebookPaths};
use crate::config::GradebookConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &GradebookPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = GradebookConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = GradebookConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = GradebookConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> GradebookPaths {
        GradebookPaths {
            config_dir: temp.path().to_path_buf(),
            data_file: temp.path().join("grades.txt"),
        }
    }

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(GradebookConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let result = run(
            &paths,
            ConfigAction::Set("decimals".into(), "1".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "decimals set to 1");

        let shown = run(&paths, ConfigAction::ShowKey("decimals".into())).unwrap();
        assert_eq!(shown.messages[0].content, "1");
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }
}
