use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid arguments: {0}.")]
    InvalidArguments(String),

    #[error("Profile file error: {0}.")]
    ConfigError(String),
}
