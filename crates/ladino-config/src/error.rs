/// Problems with the vocabulary file. None of them are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in config file '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config file '{0}' is not a mapping")]
    NotAMapping(String),

    #[error("Field '{field}' is missing from config file '{path}'")]
    MissingField { field: &'static str, path: String },
}
