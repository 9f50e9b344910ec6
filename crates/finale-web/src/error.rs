use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the engine to the page.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("2d context unavailable")]
    ContextUnavailable,

    #[error(transparent)]
    Config(#[from] finale_engine::ConfigError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
