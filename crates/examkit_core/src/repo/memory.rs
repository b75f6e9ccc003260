//! In-memory exam and question stores.
//!
//! # Responsibility
//! - Serve constructor-supplied fixtures without any external resource.
//! - Record writes so callers can inspect what was persisted.
//!
//! # Invariants
//! - Listing order is insertion order.
//! - Stores are single-threaded (`RefCell`); they are not `Sync`.
//! - A store built with `failing` rejects every call with
//!   `RepoError::Unavailable` and records nothing.

use crate::model::exam::{Exam, ExamId, Question};
use crate::repo::exam_repo::ExamRepository;
use crate::repo::question_repo::QuestionRepository;
use crate::repo::{RepoError, RepoResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Exam store backed by a `Vec`.
#[derive(Debug)]
pub struct InMemoryExamRepository {
    exams: RefCell<Vec<Exam>>,
    /// `None` once the sequence has handed out `ExamId::MAX`.
    next_id: Cell<Option<ExamId>>,
    saved: RefCell<Vec<Exam>>,
    failure: Option<String>,
}

impl InMemoryExamRepository {
    /// Creates a store seeded with `exams`.
    ///
    /// New ids continue after the largest seeded id (or start at 1).
    pub fn new(exams: Vec<Exam>) -> Self {
        let next_id = exams
            .iter()
            .filter_map(|exam| exam.id)
            .max()
            .map_or(Some(1), |max| max.max(0).checked_add(1));
        Self {
            exams: RefCell::new(exams),
            next_id: Cell::new(next_id),
            saved: RefCell::new(Vec::new()),
            failure: None,
        }
    }

    /// Creates a store whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(Vec::new())
        }
    }

    /// Overrides the next id handed out by `save`.
    pub fn with_next_id(self, next_id: ExamId) -> Self {
        self.next_id.set(Some(next_id));
        self
    }

    /// Returns every exam accepted by `save`, in call order.
    pub fn saved(&self) -> Vec<Exam> {
        self.saved.borrow().clone()
    }

    fn check_available(&self) -> RepoResult<()> {
        match &self.failure {
            Some(message) => Err(RepoError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl ExamRepository for InMemoryExamRepository {
    fn find_all(&self) -> RepoResult<Vec<Exam>> {
        self.check_available()?;
        Ok(self.exams.borrow().clone())
    }

    fn save(&self, exam: &Exam) -> RepoResult<Exam> {
        self.check_available()?;

        let mut stored = exam.clone();
        match (stored.id, self.next_id.get()) {
            (Some(id), Some(next)) if id >= next => self.next_id.set(id.checked_add(1)),
            (Some(_), _) => {}
            (None, Some(next)) => {
                stored.id = Some(next);
                self.next_id.set(next.checked_add(1));
            }
            (None, None) => {
                return Err(RepoError::InvalidData(
                    "exam id sequence exhausted".to_string(),
                ));
            }
        }
        self.saved.borrow_mut().push(exam.clone());

        let mut exams = self.exams.borrow_mut();
        match exams.iter_mut().find(|existing| existing.id == stored.id) {
            Some(existing) => *existing = stored.clone(),
            None => exams.push(stored.clone()),
        }

        Ok(stored)
    }
}

/// Question store backed by a map keyed by exam id.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    by_exam: HashMap<ExamId, Vec<Question>>,
    default_questions: Option<Vec<Question>>,
    saved_batches: RefCell<Vec<Vec<Question>>>,
    failure: Option<String>,
}

impl InMemoryQuestionRepository {
    /// Creates an empty store: every lookup yields no questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Seeds the questions returned for `exam_id`.
    pub fn with_questions<I, S>(mut self, exam_id: ExamId, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Question>,
    {
        self.by_exam
            .insert(exam_id, questions.into_iter().map(Into::into).collect());
        self
    }

    /// Serves `questions` for any exam id without its own seeded list.
    pub fn with_default_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Question>,
    {
        self.default_questions = Some(questions.into_iter().map(Into::into).collect());
        self
    }

    /// Returns every batch passed to `save_many`, in call order.
    pub fn saved_batches(&self) -> Vec<Vec<Question>> {
        self.saved_batches.borrow().clone()
    }

    fn check_available(&self) -> RepoResult<()> {
        match &self.failure {
            Some(message) => Err(RepoError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn find_questions_by_exam_id(&self, exam_id: ExamId) -> RepoResult<Vec<Question>> {
        self.check_available()?;
        Ok(self
            .by_exam
            .get(&exam_id)
            .or(self.default_questions.as_ref())
            .cloned()
            .unwrap_or_default())
    }

    fn save_many(&self, questions: &[Question]) -> RepoResult<()> {
        self.check_available()?;
        self.saved_batches.borrow_mut().push(questions.to_vec());
        Ok(())
    }
}
