use thiserror::Error;

/// Failures reported by an identity provider during the federated handshake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("unknown identity provider {0:?}")]
    UnknownProvider(String),
    #[error("login was cancelled")]
    Cancelled,
    #[error("provider returned an error: {0}")]
    Denied(String),
    #[error("callback state does not match the pending login")]
    StateMismatch,
    #[error("callback did not include an authorization code")]
    MissingCode,
    #[error("{0}")]
    Request(String),
}
