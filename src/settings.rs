use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub bot_enabled: bool,
    pub bot_mark: Mark,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            bot_enabled: false,
            bot_mark: Mark::O,
        }
    }
}

pub fn load_settings(file_path: &str) -> Result<MatchSettings, String> {
    match std::fs::read_to_string(file_path) {
        Ok(content) => serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e)),
        Err(err) => match err.kind() {
            ErrorKind::NotFound => Ok(MatchSettings::default()),
            _ => Err(format!("Failed to read settings file: {}", err)),
        },
    }
}

pub fn save_settings(file_path: &str, settings: &MatchSettings) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    std::fs::write(file_path, content).map_err(|e| format!("Failed to write settings file: {}", e))
}
