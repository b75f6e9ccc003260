//! Question store contract and SQLite implementation.
//!
//! # Responsibility
//! - Supply the ordered questions of one exam.
//! - Persist a batch of questions.
//!
//! # Invariants
//! - An exam without questions yields an empty list, not an error.
//! - `save_many` carries no owner id; SQLite stores such batches unattached.

use crate::model::exam::{ExamId, Question};
use crate::repo::{row_count, RepoResult};
use rusqlite::{params, Connection};

/// Per-exam question source.
pub trait QuestionRepository {
    /// Returns the questions of `exam_id` in stored order.
    fn find_questions_by_exam_id(&self, exam_id: ExamId) -> RepoResult<Vec<Question>>;

    /// Persists a batch of questions.
    fn save_many(&self, questions: &[Question]) -> RepoResult<()>;
}

impl<T: QuestionRepository + ?Sized> QuestionRepository for &T {
    fn find_questions_by_exam_id(&self, exam_id: ExamId) -> RepoResult<Vec<Question>> {
        (**self).find_questions_by_exam_id(exam_id)
    }

    fn save_many(&self, questions: &[Question]) -> RepoResult<()> {
        (**self).save_many(questions)
    }
}

/// SQLite-backed question store.
pub struct SqliteQuestionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteQuestionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Replaces the questions owned by `exam_id`.
    ///
    /// Not part of the question contract; used to seed owned questions.
    pub fn attach_questions(&self, exam_id: ExamId, questions: &[Question]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM questions WHERE exam_id = ?1;", [exam_id])?;
        insert_batch(&tx, Some(exam_id), questions)?;
        tx.commit()?;
        Ok(())
    }

    /// Returns the number of stored questions that have no owning exam.
    pub fn count_unattached(&self) -> RepoResult<u64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM questions WHERE exam_id IS NULL;",
            [],
            |row| row.get(0),
        )?;
        row_count("questions", count)
    }
}

impl QuestionRepository for SqliteQuestionRepository<'_> {
    fn find_questions_by_exam_id(&self, exam_id: ExamId) -> RepoResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT content FROM questions
             WHERE exam_id = ?1
             ORDER BY position ASC, id ASC;",
        )?;
        let rows = stmt.query_map([exam_id], |row| row.get::<_, String>(0))?;

        let mut questions = Vec::new();
        for question in rows {
            questions.push(question?);
        }
        Ok(questions)
    }

    fn save_many(&self, questions: &[Question]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        insert_batch(&tx, None, questions)?;
        tx.commit()?;
        Ok(())
    }
}

fn insert_batch(
    conn: &Connection,
    exam_id: Option<ExamId>,
    questions: &[Question],
) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO questions (exam_id, position, content) VALUES (?1, ?2, ?3);",
    )?;
    for (position, content) in (0_i64..).zip(questions) {
        stmt.execute(params![exam_id, position, content.as_str()])?;
    }
    Ok(())
}
