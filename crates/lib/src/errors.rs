use thiserror::Error;

/// Failures raised while reading the user's records from the relational store.
///
/// The chat flow never surfaces these to the caller: they are logged and the
/// request continues without database context.
#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Storage connection error: {0}")]
    Connection(String),
    #[error("Storage query failed: {0}")]
    Query(String),
}

/// Failures raised while calling the external completion provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Failed to build Reqwest client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Failed to send request to completion API: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize completion API response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Completion API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Completion API returned no choices")]
    NoChoices,
}

/// Raised when a `ChatClient` is built without one of its collaborators.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("AI provider is missing")]
    MissingAiProvider,
    #[error("Storage provider is missing")]
    MissingStore,
}
