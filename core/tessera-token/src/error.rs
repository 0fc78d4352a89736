use tessera_protocol::TokenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    /// A feature consulted by a match was never populated by enrichment.
    #[error("feature `{feature}` has not been populated on this token")]
    MissingFeatureData { feature: &'static str },

    /// A loaded entity cannot be encoded as an identifier before it is persisted.
    #[error("reference `{field}` holds an entity without a database id")]
    InvalidReferenceType { field: &'static str },

    #[error("token already has id {existing}")]
    IdAlreadyAssigned { existing: TokenId },

    #[error("malformed token record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokenError>;
