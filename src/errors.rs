use sea_orm::error::DbErr;
use thiserror::Error;

/// Error taxonomy for the ordering core.
///
/// Every failure a caller can observe maps onto one of these variants, so a
/// presentation layer can translate kinds into messages without matching on
/// strings or catching a generic failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed, out-of-range, or unknown-identifier arguments. Always
    /// detected before any mutation takes place.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Commit attempted with no line items.
    #[error("Order contains no line items")]
    EmptyOrder,

    /// The referenced partner does not exist at commit time.
    #[error("Partner {0} not found")]
    PartnerNotFound(i32),

    /// Read-side lookup miss.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport, constraint, or transaction failure during persistence.
    /// Only surfaced after the enclosing transaction has rolled back in
    /// full; no partial writes remain observable.
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),
}
