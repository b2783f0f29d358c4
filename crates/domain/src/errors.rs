use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    #[error("No records found for {0}")]
    NoRecords(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),
}
