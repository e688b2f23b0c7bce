use thiserror::Error;

/// Error type for the Supabase backend boundary.
///
/// Covers the transport, the PostgREST data API, and the GoTrue auth API. Auth
/// failures are a distinguished variant because their messages are shown to the
/// user verbatim, while data-API failures are logged and surfaced through a
/// generic, translated notification.
#[derive(Error, Debug)]
pub enum Error {
    /// Backend URL or API key missing from the build configuration.
    #[error("Supabase backend is not configured")]
    Config,
    /// The request never produced a response (network failure, CORS, DNS).
    #[error("Request failed: {0}")]
    Network(String),
    /// The data API answered with a non-success status.
    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },
    /// The auth API rejected the request; the message is user-facing.
    #[error("{0}")]
    Auth(String),
    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Whether this error came from the auth subsystem.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[cfg(feature = "web")]
impl From<reqwasm::Error> for Error {
    fn from(err: reqwasm::Error) -> Self {
        Self::Network(err.to_string())
    }
}
