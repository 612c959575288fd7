use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Classified failure of a catalog write.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A storage-layer check constraint rejected the write.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The write referenced a row that does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    #[error("database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::ForeignKeyConstraintViolation(msg)) = err.sql_err() {
            return CatalogError::ForeignKey(msg);
        }

        // sea-orm has no typed variant for check violations; match the
        // backend message ("CHECK constraint failed" on SQLite, "violates
        // check constraint" on PostgreSQL).
        let msg = err.to_string();
        if msg.contains("CHECK constraint") || msg.contains("check constraint") {
            CatalogError::Validation(msg)
        } else if msg.contains("FOREIGN KEY constraint") || msg.contains("foreign key constraint") {
            CatalogError::ForeignKey(msg)
        } else {
            CatalogError::Database(err)
        }
    }
}
