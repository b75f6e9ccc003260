//! Sample catalog data for demos and tests.
//!
//! Every function returns fresh owned values; pass them into a store
//! constructor instead of sharing them.

use crate::model::exam::{Exam, Question};

/// Three exams with ids 1..=3.
pub fn sample_exams() -> Vec<Exam> {
    vec![
        Exam::with_id(1, "Data Analysis"),
        Exam::with_id(2, "IT Security"),
        Exam::with_id(3, "Dev Frameworks"),
    ]
}

/// Same names as `sample_exams`, with negative ids.
pub fn sample_exams_negative_ids() -> Vec<Exam> {
    vec![
        Exam::with_id(-1, "Data Analysis"),
        Exam::with_id(-2, "IT Security"),
        Exam::with_id(-3, "Dev Frameworks"),
    ]
}

/// Five questions served for any sample exam.
pub fn sample_questions() -> Vec<Question> {
    ["arithmetic", "probability", "integrals", "derivatives", "equations"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// An unsaved exam that the sample stores will assign id 4 on save.
pub fn unsaved_exam() -> Exam {
    Exam::new("Systems Dev")
}

#[cfg(test)]
mod tests {
    use super::{sample_exams, sample_exams_negative_ids, sample_questions, unsaved_exam};

    #[test]
    fn fixtures_line_up() {
        let positive = sample_exams();
        let negative = sample_exams_negative_ids();

        assert_eq!(positive.len(), negative.len());
        for (a, b) in positive.iter().zip(&negative) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.id.map(i64::abs), b.id.map(i64::abs));
        }
        assert_eq!(sample_questions().len(), 5);
        assert!(unsaved_exam().id.is_none());
    }
}
