//! Exam lookup and enrichment service.
//!
//! # Responsibility
//! - Resolve an exam by partial name.
//! - Attach an exam's questions from the question store.
//! - Save an exam and cascade its questions.
//!
//! # Invariants
//! - Each operation calls each collaborator at most once, exam store first.
//! - Collaborator failures are returned unchanged; nothing is retried,
//!   wrapped or logged here.
//! - A missing exam is `Ok(None)`, never an error.
//! - The cascade reads the caller-supplied exam's questions, never the copy
//!   returned by the exam store.

use crate::model::exam::Exam;
use crate::repo::exam_repo::ExamRepository;
use crate::repo::question_repo::QuestionRepository;
use crate::repo::RepoResult;
use log::debug;

/// Use-case service over one exam store and one question store.
pub struct ExamService<E: ExamRepository, Q: QuestionRepository> {
    exams: E,
    questions: Q,
}

impl<E: ExamRepository, Q: QuestionRepository> ExamService<E, Q> {
    /// Creates a service using the provided store implementations.
    pub fn new(exams: E, questions: Q) -> Self {
        Self { exams, questions }
    }

    /// Returns the first exam, in exam-store listing order, whose name
    /// contains `name_part` (case-sensitive, untrimmed).
    pub fn find_exam_by_name(&self, name_part: &str) -> RepoResult<Option<Exam>> {
        let exam = self
            .exams
            .find_all()?
            .into_iter()
            .find(|exam| exam.name_contains(name_part));

        debug!(
            "event=exam_find module=service status=ok matched={}",
            exam.is_some()
        );
        Ok(exam)
    }

    /// Resolves an exam by partial name and attaches its questions.
    ///
    /// # Contract
    /// - No match: returns `Ok(None)` without calling the question store.
    /// - Match: queries questions with the resolved exam's own id and
    ///   replaces `questions` with the result.
    /// - A resolved exam without an id is returned as-is; there is nothing to
    ///   query questions by.
    pub fn find_exam_with_questions(&self, name_part: &str) -> RepoResult<Option<Exam>> {
        let Some(mut exam) = self.find_exam_by_name(name_part)? else {
            return Ok(None);
        };

        match exam.id {
            Some(exam_id) => {
                exam.questions = self.questions.find_questions_by_exam_id(exam_id)?;
                debug!(
                    "event=exam_enrich module=service status=ok exam_id={exam_id} questions={}",
                    exam.questions.len()
                );
            }
            None => debug!("event=exam_enrich module=service status=skipped reason=unpersisted"),
        }

        Ok(Some(exam))
    }

    /// Saves `exam`, then saves its questions when it has any.
    ///
    /// # Contract
    /// - The exam store is always called exactly once.
    /// - `save_many` is called exactly once with `exam.questions` when that
    ///   list is non-empty, and never otherwise.
    /// - An exam-store failure skips the cascade.
    /// - A cascade failure is returned after the exam write has committed;
    ///   no rollback is attempted.
    ///
    /// Returns the exam as reported by the exam store.
    pub fn save_exam(&self, exam: &Exam) -> RepoResult<Exam> {
        let saved = self.exams.save(exam)?;

        if exam.has_questions() {
            self.questions.save_many(&exam.questions)?;
        }

        debug!(
            "event=exam_save module=service status=ok exam_id={:?} cascaded={}",
            saved.id,
            exam.questions.len()
        );
        Ok(saved)
    }
}
