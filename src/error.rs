use std::path::PathBuf;

pub type OutforgeResult<T> = Result<T, OutforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum OutforgeError {
    #[error("template not found: '{path}': {source}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    #[error("missing placeholder value: '{0}'")]
    MissingPlaceholder(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutforgeError {
    pub fn malformed_template(msg: impl Into<String>) -> Self {
        Self::MalformedTemplate(msg.into())
    }

    pub fn missing_placeholder(key: impl Into<String>) -> Self {
        Self::MissingPlaceholder(key.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
