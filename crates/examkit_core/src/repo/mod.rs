//! Collaborator contracts for exam and question storage, plus backends.
//!
//! # Responsibility
//! - Define the two capability contracts consumed by `ExamService`.
//! - Provide in-memory, slow and SQLite-backed implementations.
//!
//! # Invariants
//! - Every backend reports failures through `RepoError`; callers above the
//!   repository layer never see backend-specific error types.
//! - "No match" is an empty result, never an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod exam_repo;
pub mod memory;
pub mod question_repo;
pub mod slow;

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure raised by an exam or question store.
#[derive(Debug)]
pub enum RepoError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Persisted state could not be decoded.
    InvalidData(String),
    /// The backing source refused or failed the call.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Converts a SQLite `COUNT(*)` result, rejecting negative values.
pub(crate) fn row_count(table: &str, count: i64) -> RepoResult<u64> {
    u64::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}` in {table}")))
}

#[cfg(test)]
mod tests {
    use super::{row_count, RepoError};
    use crate::db::DbError;
    use std::error::Error;

    #[test]
    fn db_errors_keep_their_source() {
        let err = RepoError::from(DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        });

        assert!(err.source().is_some());
        assert!(err.to_string().contains("newer than supported"));
    }

    #[test]
    fn row_count_rejects_negative_values() {
        assert_eq!(row_count("exams", 3).unwrap(), 3);

        let err = row_count("questions", -1).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("questions")));
    }

    #[test]
    fn unavailable_has_no_source() {
        let err = RepoError::Unavailable("offline".to_string());

        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "store unavailable: offline");
    }
}
