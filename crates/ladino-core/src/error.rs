use ladino_config::ConfigError;

/// Everything that can stop a build. The first one encountered wins.
#[derive(Debug, thiserror::Error)]
pub enum LadinoError {
    /// Malformed or incomplete vocabulary file
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A word file breaks the field or vocabulary rules
    #[error("{message} in file '{file}'")]
    Schema { file: String, message: String },

    /// A translation field has a shape we cannot use
    #[error("{message} in file '{file}'")]
    Value { file: String, message: String },

    /// A curated list names a word the dictionary does not have
    #[error("List '{list}' refers to '{word}' which is not in the dictionary")]
    Consistency { list: String, word: String },

    #[error("Invalid filename '{0}'")]
    InvalidFilename(String),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LadinoError {
    pub fn schema(file: &str, message: impl Into<String>) -> Self {
        LadinoError::Schema {
            file: file.to_string(),
            message: message.into(),
        }
    }

    pub fn value(file: &str, message: impl Into<String>) -> Self {
        LadinoError::Value {
            file: file.to_string(),
            message: message.into(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `LadinoError` type.
pub type Result<T> = std::result::Result<T, LadinoError>;
