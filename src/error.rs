use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read file {path}: {source}")]
    ReadLog {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error marshalling JSON payload: {0}")]
    Serialize(String),

    #[error("Error sending HTTP request to the API: {0}")]
    Http(String),

    #[error("API responded with status {status}: {body}")]
    Api { status: String, body: String },

    #[error("Error decoding API response: {0}")]
    Decode(String),

    #[error("Unexpected response format: 'report' field missing or not a string")]
    UnexpectedFormat,

    #[error("{context}: {source}")]
    Output {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn read_log(path: &Path, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn api(status: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Api {
            status: status.into(),
            body: body.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn output(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            context: context.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
