//! Core domain logic for ExamKit.
//! Exam lookup, question enrichment and save-with-cascade over pluggable stores.

pub mod db;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::exam::{Exam, ExamId, Question};
pub use repo::exam_repo::{ExamRepository, SqliteExamRepository};
pub use repo::memory::{InMemoryExamRepository, InMemoryQuestionRepository};
pub use repo::question_repo::{QuestionRepository, SqliteQuestionRepository};
pub use repo::slow::{SlowQuestionRepository, DEFAULT_QUESTION_LATENCY};
pub use repo::{RepoError, RepoResult};
pub use service::exam_service::ExamService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
