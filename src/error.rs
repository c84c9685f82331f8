use thiserror::Error;

// Enum for handling extension-level errors. None of these ever surface to
// the end user; every failure degrades to "do nothing for this event" and is
// only observable in the diagnostic log.
#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("Host context unavailable")]
    MissingCollaborator, // Fatal at startup; the extension stays inert.

    #[error("Configured character not found: {0}")]
    UnresolvedCharacter(String), // Recovered by skipping the current event.

    #[error("Event payload missing field: {0}")]
    MalformedPayload(&'static str), // Recovered by treating the event as a no-op.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors from the settings file helpers.
}

pub type Result<T> = std::result::Result<T, ExtensionError>;
