//! Start options passed from the host page

use game_core::Config;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::ClientError;

/// Options accepted by `start`, as a JSON object. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StartOptions {
    /// Id of the element the canvas is appended to
    pub mount_id: String,
    pub log_level: Option<String>,
    pub game: Config,
}

impl Default for StartOptions {
    fn default() -> Self {
        Self {
            mount_id: "pong".to_string(),
            log_level: None,
            game: Config::default(),
        }
    }
}

impl StartOptions {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let options: Self = serde_json::from_str(json)?;
        options.game.validate()?;
        Ok(options)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ClientError> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .map_err(|_| ClientError::LogLevel(level.clone())),
            None if cfg!(debug_assertions) => Ok(LevelFilter::Debug),
            None => Ok(LevelFilter::Info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_defaults() {
        let options = StartOptions::from_json("{}").unwrap();
        assert_eq!(options.mount_id, "pong");
        assert_eq!(options.game, Config::default());
        assert!(options.log_level().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_nested_game_config() {
        let options = StartOptions::from_json(
            r#"{ "mount_id": "court", "log_level": "trace", "game": { "computer_max_speed": 7.0 } }"#,
        )
        .unwrap();
        assert_eq!(options.mount_id, "court");
        assert_eq!(options.log_level().unwrap(), LevelFilter::Trace);
        assert_eq!(options.game.computer_max_speed, 7.0);
        assert_eq!(options.game.player_speed, 4.0);
    }

    #[wasm_bindgen_test]
    fn test_bad_log_level() {
        let options = StartOptions::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert!(matches!(options.log_level(), Err(ClientError::LogLevel(level)) if level == "loud"));
    }

    #[wasm_bindgen_test]
    fn test_invalid_game_config() {
        let err = StartOptions::from_json(r#"{ "game": { "tick_rate": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
