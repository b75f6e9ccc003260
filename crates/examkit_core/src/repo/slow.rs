//! Latency-injecting question source.
//!
//! Wraps another `QuestionRepository` and blocks before every delegated call,
//! standing in for a slow remote backend. Core orchestration adds no timeout,
//! so the delay is paid in full by the caller.

use crate::model::exam::{ExamId, Question};
use crate::repo::question_repo::QuestionRepository;
use crate::repo::RepoResult;
use log::debug;
use std::time::Duration;

/// Delay applied when no latency is configured.
pub const DEFAULT_QUESTION_LATENCY: Duration = Duration::from_secs(2);

/// Question store decorator that sleeps before each call.
#[derive(Debug)]
pub struct SlowQuestionRepository<Q> {
    inner: Q,
    latency: Duration,
}

impl<Q: QuestionRepository> SlowQuestionRepository<Q> {
    /// Wraps `inner` with `DEFAULT_QUESTION_LATENCY`.
    pub fn new(inner: Q) -> Self {
        Self::with_latency(inner, DEFAULT_QUESTION_LATENCY)
    }

    pub fn with_latency(inner: Q, latency: Duration) -> Self {
        Self { inner, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Returns the wrapped store.
    pub fn into_inner(self) -> Q {
        self.inner
    }

    fn pause(&self, operation: &str) {
        debug!(
            "event=question_store_delay module=repo operation={operation} delay_ms={}",
            self.latency.as_millis()
        );
        std::thread::sleep(self.latency);
    }
}

impl<Q: QuestionRepository> QuestionRepository for SlowQuestionRepository<Q> {
    fn find_questions_by_exam_id(&self, exam_id: ExamId) -> RepoResult<Vec<Question>> {
        self.pause("find_questions_by_exam_id");
        self.inner.find_questions_by_exam_id(exam_id)
    }

    fn save_many(&self, questions: &[Question]) -> RepoResult<()> {
        self.pause("save_many");
        self.inner.save_many(questions)
    }
}
