use thiserror::Error;

/// Startup configuration error. Reported by `main` before the server
/// starts, so it never becomes an HTTP response.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable: {0}")]
    InvalidEnvVar(&'static str),
}
