use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Keys are checked before the config file is read, so a typo never
/// depends on (or touches) what is on disk.
pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let key = match &action {
        ConfigAction::ShowAll => None,
        ConfigAction::ShowKey(key) | ConfigAction::Set(key, _) => Some(key.as_str()),
    };
    if let Some(key) = key.filter(|k| !RosterConfig::KEYS.iter().any(|known| known == k)) {
        return Ok(error_result(format!(
            "Unknown config key: {} (expected one of: {})",
            key,
            RosterConfig::KEYS.join(", ")
        )));
    }

    let mut config = RosterConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            if let Some(value) = config.get(&key) {
                result.add_message(CmdMessage::info(value));
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(error_result(e));
            }
            config.save(dir)?;
            tracing::debug!(op = "config_set", key = %key, value = %value, "saved config");

            let shown = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result)
        }
    }
}

fn error_result(message: impl Into<String>) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(message));
    result
}
