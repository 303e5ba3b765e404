use thiserror::Error;

#[derive(Error, Debug)]
pub enum HmsError {
    #[error("{step}: unexpected status {status}")]
    UnexpectedStatus {
        step: String,
        status: u16,
        body: String,
    },

    #[error("could not connect to {base_url}: {source}")]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{step}: response is missing `{field}`")]
    MissingField { step: String, field: String },

    #[error("verification failed for {field}: expected {expected}, got {actual}")]
    Verification {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl HmsError {
    pub fn missing(step: &str, field: &str) -> Self {
        Self::MissingField {
            step: step.to_string(),
            field: field.to_string(),
        }
    }

    pub fn mismatch(field: &str, expected: impl ToString, actual: impl ToString) -> Self {
        Self::Verification {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Response body for status failures, pretty-printed when it is JSON.
    pub fn response_body(&self) -> Option<String> {
        match self {
            Self::UnexpectedStatus { body, .. } => Some(
                serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|value| serde_json::to_string_pretty(&value).ok())
                    .unwrap_or_else(|| body.clone()),
            ),
            _ => None,
        }
    }

    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

pub type Result<T> = std::result::Result<T, HmsError>;
