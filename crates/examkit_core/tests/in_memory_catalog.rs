use examkit_core::fixtures::{sample_exams, sample_questions, unsaved_exam};
use examkit_core::{
    Exam, ExamRepository, ExamService, InMemoryExamRepository, InMemoryQuestionRepository,
    RepoError, SlowQuestionRepository,
};
use std::time::{Duration, Instant};

fn sample_service() -> ExamService<InMemoryExamRepository, InMemoryQuestionRepository> {
    ExamService::new(
        InMemoryExamRepository::new(sample_exams()),
        InMemoryQuestionRepository::new().with_default_questions(sample_questions()),
    )
}

#[test]
fn sample_catalog_resolves_and_enriches() {
    let service = sample_service();

    let exam = service.find_exam_with_questions("Analysis").unwrap().unwrap();

    assert_eq!(exam.id, Some(1));
    assert_eq!(exam.name, "Data Analysis");
    assert_eq!(exam.questions, sample_questions());
    assert!(exam.questions.contains(&"integrals".to_string()));
}

#[test]
fn enrichment_does_not_leak_into_the_catalog() {
    let exams = InMemoryExamRepository::new(sample_exams());
    let questions = InMemoryQuestionRepository::new().with_questions(2, ["firewalls"]);
    let service = ExamService::new(&exams, &questions);

    let enriched = service.find_exam_with_questions("Security").unwrap().unwrap();
    assert_eq!(enriched.questions, vec!["firewalls"]);

    let listed = service.find_exam_by_name("Security").unwrap().unwrap();
    assert!(listed.questions.is_empty());
}

#[test]
fn saving_sample_exam_assigns_next_id_and_records_batch() {
    let exams = InMemoryExamRepository::new(sample_exams());
    let questions = InMemoryQuestionRepository::new();
    let service = ExamService::new(&exams, &questions);
    let exam = unsaved_exam().with_questions(["q1", "q2"]);

    let saved = service.save_exam(&exam).unwrap();

    assert_eq!(saved.id, Some(4));
    assert_eq!(exams.saved(), vec![exam.clone()]);
    assert_eq!(questions.saved_batches(), vec![vec!["q1", "q2"]]);
    assert_eq!(
        service.find_exam_by_name("Systems").unwrap().map(|e| e.id),
        Some(Some(4))
    );
}

#[test]
fn failing_question_store_keeps_exam_write() {
    let exams = InMemoryExamRepository::new(Vec::new()).with_next_id(40);
    let questions = InMemoryQuestionRepository::failing("bank offline");
    let service = ExamService::new(&exams, &questions);

    let err = service
        .save_exam(&unsaved_exam().with_questions(sample_questions()))
        .unwrap_err();

    assert!(matches!(err, RepoError::Unavailable(_)));
    let stored = exams.find_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, Some(40));
}

#[test]
fn failing_exam_store_propagates_unchanged() {
    let service = ExamService::new(
        InMemoryExamRepository::failing("catalog offline"),
        InMemoryQuestionRepository::new(),
    );

    let err = service.find_exam_by_name("Data").unwrap_err();

    assert_eq!(err.to_string(), "store unavailable: catalog offline");
}

#[test]
fn slow_question_store_blocks_the_whole_lookup() {
    let latency = Duration::from_millis(30);
    let service = ExamService::new(
        InMemoryExamRepository::new(sample_exams()),
        SlowQuestionRepository::with_latency(
            InMemoryQuestionRepository::new().with_default_questions(["integrals"]),
            latency,
        ),
    );

    let started = Instant::now();
    let exam = service.find_exam_with_questions("Data").unwrap().unwrap();

    assert!(started.elapsed() >= latency);
    assert_eq!(exam.questions, vec!["integrals"]);
}

#[test]
fn slow_question_store_is_skipped_without_match() {
    let service = ExamService::new(
        InMemoryExamRepository::new(Vec::<Exam>::new()),
        SlowQuestionRepository::with_latency(
            InMemoryQuestionRepository::new(),
            Duration::from_secs(30),
        ),
    );

    let started = Instant::now();
    assert!(service.find_exam_with_questions("Data").unwrap().is_none());
    assert!(started.elapsed() < Duration::from_secs(30));
}
