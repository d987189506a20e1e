//! Error types for the data-access layer.

use thiserror::Error;

/// Result type alias for data-access operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors surfaced by the data-access layer.
///
/// A lookup that matches no rows is **not** an error: single-row lookups
/// return `Ok(None)` for that case.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// A statement that must return a row returned none
    #[error("Not found: {0}")]
    NotFound(String),

    /// Row decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Builder-level validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl DbError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a unique violation error
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation(_))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Map a SQLSTATE code onto a constraint variant, if it is one.
    pub(crate) fn from_sqlstate(code: &str, constraint: &str, message: &str) -> Option<Self> {
        let detail = format!("{constraint}: {message}");
        match code {
            "23505" => Some(Self::UniqueViolation(detail)),
            "23503" => Some(Self::ForeignKeyViolation(detail)),
            "23514" => Some(Self::CheckViolation(detail)),
            _ => None,
        }
    }

    /// Parse a tokio_postgres error into a more specific DbError
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if let Some(mapped) =
                Self::from_sqlstate(db_err.code().code(), constraint, db_err.message())
            {
                return mapped;
            }
        }
        if err.is_closed() {
            return Self::Connection(err.to_string());
        }
        Self::Query(err)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for DbError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}

/// Opt-in "log and swallow" handling for callers that only care about data.
///
/// Converts a failed result into `None` after emitting an error event, so the
/// caller can no longer tell "query failed" from "no data". Prefer matching on
/// the `DbResult` directly.
pub trait DbResultExt<T> {
    /// Log the error (if any) under `tag` and discard it.
    fn or_log(self, tag: &str) -> Option<T>;
}

impl<T> DbResultExt<T> for DbResult<T> {
    fn or_log(self, tag: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(target: "lightbnb.sql", tag, error = %err, "query failed");
                None
            }
        }
    }
}
