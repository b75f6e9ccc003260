//! Exam store contract and SQLite implementation.
//!
//! # Responsibility
//! - Supply the full exam listing in a stable order.
//! - Persist one exam and report the stored representation.
//!
//! # Invariants
//! - `find_all` order is the order lookups scan in.
//! - `save` on an exam without `id` assigns one; an existing `id` is kept.

use crate::model::exam::{Exam, ExamId};
use crate::repo::{row_count, RepoResult};
use rusqlite::{params, Connection};

/// Catalog of exams.
pub trait ExamRepository {
    /// Returns every exam, in the store's listing order.
    fn find_all(&self) -> RepoResult<Vec<Exam>>;

    /// Persists `exam` and returns the stored representation.
    ///
    /// The returned identifier may differ from the input's.
    fn save(&self, exam: &Exam) -> RepoResult<Exam>;
}

impl<T: ExamRepository + ?Sized> ExamRepository for &T {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        (**self).find_all()
    }

    fn save(&self, exam: &Exam) -> RepoResult<Exam> {
        (**self).save(exam)
    }
}

/// SQLite-backed exam store.
///
/// Questions are not stored here; returned exams always carry an empty
/// question list.
pub struct SqliteExamRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExamRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns the number of stored exams.
    pub fn count(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM exams;", [], |row| row.get(0))?;
        row_count("exams", count)
    }
}

impl ExamRepository for SqliteExamRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM exams ORDER BY id ASC;")?;
        let rows = stmt.query_map([], |row| {
            Ok(Exam::with_id(row.get::<_, ExamId>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut exams = Vec::new();
        for exam in rows {
            exams.push(exam?);
        }
        Ok(exams)
    }

    fn save(&self, exam: &Exam) -> RepoResult<Exam> {
        let id = match exam.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO exams (id, name) VALUES (?1, ?2)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name;",
                    params![id, exam.name.as_str()],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO exams (name) VALUES (?1);",
                    params![exam.name.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        Ok(Exam::with_id(id, exam.name.clone()))
    }
}
