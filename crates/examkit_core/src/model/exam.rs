//! Exam domain model.
//!
//! # Responsibility
//! - Define the catalog record (`Exam`) and its ordered sub-items (`Question`).
//! - Provide small read helpers used by lookup orchestration.
//!
//! # Invariants
//! - `id` is `None` until a store persists the exam.
//! - `questions` preserves the order supplied by the question store.
//! - `name` is not validated; empty names are legal but never match
//!   meaningfully in practice.

use serde::{Deserialize, Serialize};

/// Store-assigned exam identifier.
pub type ExamId = i64;

/// One question attached to an exam.
///
/// Kept as a type alias: a question is plain text with positional identity.
pub type Question = String;

/// Catalog record resolved by name and enriched with questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Assigned by the exam store on first save.
    pub id: Option<ExamId>,
    /// Display name used for partial-name lookup.
    pub name: String,
    /// Ordered questions; empty until attached by the caller or a lookup.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Exam {
    /// Creates an unsaved exam with no questions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Creates an exam with a known identifier.
    ///
    /// Used by fixtures and storage readers where identity already exists.
    pub fn with_id(id: ExamId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Replaces the question list, consuming and returning the exam.
    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Question>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether a store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Returns whether any question is attached.
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Case-sensitive substring match on `name`; no trimming is applied.
    pub fn name_contains(&self, name_part: &str) -> bool {
        self.name.contains(name_part)
    }
}

#[cfg(test)]
mod tests {
    use super::Exam;

    #[test]
    fn name_contains_is_case_sensitive_and_untrimmed() {
        let exam = Exam::with_id(2, "IT Security");

        assert!(exam.name_contains("Security"));
        assert!(exam.name_contains(""));
        assert!(!exam.name_contains("security"));
        assert!(!exam.name_contains(" Security "));
    }

    #[test]
    fn with_questions_keeps_order() {
        let exam = Exam::new("Systems Dev").with_questions(["q2", "q1"]);

        assert_eq!(exam.questions, vec!["q2".to_string(), "q1".to_string()]);
        assert!(exam.has_questions());
        assert!(!exam.is_persisted());
    }
}
