use crate::commands::{CmdMessage, CmdResult};
use crate::config::MemoPadConfig;
use crate::error::{MemoPadError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = MemoPadConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = MemoPadConfig::load(config_dir)?;
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
            let mut result = CmdResult::default();
            // An unreadable config file is replaced, so setting a key repairs it
            let mut config = match MemoPadConfig::load(config_dir) {
                Ok(config) => config,
                Err(MemoPadError::Config(reason)) => {
                    tracing::warn!(%reason, "replacing unreadable config");
                    result.add_message(CmdMessage::warning(format!(
                        "{}; starting from defaults",
                        reason
                    )));
                    MemoPadConfig::default()
                }
                Err(e) => return Err(e),
            };
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            tracing::info!(%key, %value, "config updated");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            Ok(result
                .with_changed(true)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                )))
                .with_config(config))
        }
    }
}
