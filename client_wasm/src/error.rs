//! Errors surfaced while starting the browser client

use game_core::ConfigError;
use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("No global `window` exists")]
    NoWindow,

    #[error("The window has no document")]
    NoDocument,

    #[error("The canvas has no 2D context")]
    NoCanvasContext,

    #[error("Start options are not valid JSON : {0}")]
    Options(#[from] serde_json::Error),

    #[error("Unknown log level `{0}`")]
    LogLevel(String),

    #[error("Invalid game config : {0}")]
    Config(#[from] ConfigError),

    #[error("JavaScript error : {0}")]
    Js(String),
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
