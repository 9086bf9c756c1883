use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required element (header, menu trigger, menu panel) is not in the page.
    #[error("required element `{0}` is missing")]
    MissingElement(String),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("config: invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// A browser API threw; the payload is whatever the exception stringified to.
    #[error("browser: {0}")]
    Browser(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
