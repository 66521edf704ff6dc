use thiserror::Error;
use uuid::Uuid;

/// Error surface of every store operation.
///
/// Point lookups and single-id updates report absence as `NotFound`.
/// Set-based updates never do; losing a claim race is a successful result
/// with an affected count of zero.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} insert references a row that does not exist: {detail}")]
    ReferentialIntegrity { entity: &'static str, detail: String },

    #[error("invalid status value: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: Uuid) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Classify a write failure. Foreign-key violations become
    /// `ReferentialIntegrity`; check violations on a status column become
    /// `InvalidStatus`; everything else passes through.
    pub(crate) fn from_write(entity: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            match db.kind() {
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return StoreError::ReferentialIntegrity {
                        entity,
                        detail: db.message().to_string(),
                    };
                }
                sqlx::error::ErrorKind::CheckViolation => {
                    return StoreError::InvalidStatus(db.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn is_referential_integrity(&self) -> bool {
        matches!(self, StoreError::ReferentialIntegrity { .. })
    }
}
