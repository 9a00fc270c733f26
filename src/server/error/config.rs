use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// One or more required environment variables are not set or are empty.
    ///
    /// Every missing variable is listed so that a misconfigured deployment can be fixed in
    /// one pass. Check the `.env.example` file for required configuration variables.
    #[error("Missing required env vars: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
