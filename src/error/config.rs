use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The bot cannot authenticate with Discord without its token. Set it in the
    /// environment or in a `.env` file next to the binary.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
