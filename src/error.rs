use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("slide index {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("no faq item with id {0:?}")]
    NotFound(String),

    #[error("faq item id {0:?} appears more than once")]
    DuplicateId(String),

    #[error("required element {0} not found")]
    MissingElement(&'static str),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("request failed: {0}")]
    Http(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Error::Js(message),
            None => Error::Js(format!("{:?}", value)),
        }
    }
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Error::Http(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
