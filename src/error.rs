use thiserror::Error;

/// Dogwalk application error types
///
/// The first group is reported back to callers as per-request outcomes;
/// the rest are infrastructure failures that propagate unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown dog or dogs: {}", names.join(", "))]
    UnknownDogs { names: Vec<String> },

    #[error("Could not find the referenced walk")]
    WalkNotFound,

    #[error("Could not find the referenced dog")]
    DogNotFound,

    #[error("Invalid dog name: {reason}")]
    InvalidDogName { reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal,
}

impl Error {
    pub fn unknown_dogs(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::UnknownDogs {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_dog_name(reason: impl Into<String>) -> Self {
        Self::InvalidDogName {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
