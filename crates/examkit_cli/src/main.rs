//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire `examkit_core` stores into an `ExamService` and run one lookup and
//!   one save against the sample catalog.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Logging is enabled when `EXAMKIT_LOG_DIR` is set (absolute path); the level
//! comes from `EXAMKIT_LOG_LEVEL` or the build default.

use clap::Parser;
use examkit_core::db::open_db;
use examkit_core::fixtures::{sample_exams, sample_questions, unsaved_exam};
use examkit_core::{
    default_log_level, init_logging, Exam, ExamRepository, ExamService, InMemoryExamRepository,
    InMemoryQuestionRepository, QuestionRepository, SlowQuestionRepository, SqliteExamRepository,
    SqliteQuestionRepository,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_QUERY: &str = "Data";

#[derive(Debug, Parser)]
#[command(
    name = "examkit_cli",
    about = "Look up a sample exam with its questions, then save one",
    version
)]
struct CliArgs {
    /// SQLite catalog file; seeded with the sample exams when empty.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Put a slow question source in front of the question store.
    #[arg(long)]
    slow: bool,
    /// Partial exam name to resolve (case-sensitive).
    query: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();
    init_logging_from_env()?;

    println!("examkit_core version={}", examkit_core::core_version());
    let query = args.query.as_deref().unwrap_or(DEFAULT_QUERY);

    match &args.db {
        Some(path) => {
            let conn = open_db(path)?;
            let exams = SqliteExamRepository::new(&conn);
            let questions = SqliteQuestionRepository::new(&conn);
            if exams.count()? == 0 {
                for exam in sample_exams() {
                    let saved = exams.save(&exam)?;
                    if let Some(id) = saved.id {
                        questions.attach_questions(id, &sample_questions())?;
                    }
                }
            }
            run_with(exams, questions, args.slow, query)
        }
        None => run_with(
            InMemoryExamRepository::new(sample_exams()),
            InMemoryQuestionRepository::new().with_default_questions(sample_questions()),
            args.slow,
            query,
        ),
    }
}

fn run_with<E, Q>(exams: E, questions: Q, slow: bool, query: &str) -> Result<(), Box<dyn Error>>
where
    E: ExamRepository,
    Q: QuestionRepository,
{
    if slow {
        demo(&ExamService::new(exams, SlowQuestionRepository::new(questions)), query)
    } else {
        demo(&ExamService::new(exams, questions), query)
    }
}

fn demo<E, Q>(service: &ExamService<E, Q>, query: &str) -> Result<(), Box<dyn Error>>
where
    E: ExamRepository,
    Q: QuestionRepository,
{
    info!("event=cli_demo module=cli status=start query={query}");

    match service.find_exam_with_questions(query)? {
        Some(exam) => print_exam("found", &exam),
        None => println!("found none for `{query}`"),
    }

    let draft = unsaved_exam().with_questions(sample_questions());
    let saved = service.save_exam(&draft)?;
    print_exam("saved", &saved);
    println!("cascaded questions={}", draft.questions.len());

    info!("event=cli_demo module=cli status=ok");
    Ok(())
}

fn print_exam(label: &str, exam: &Exam) {
    let id = exam
        .id
        .map_or_else(|| "unassigned".to_string(), |id| id.to_string());
    println!("{label} id={id} name={}", exam.name);
    for question in &exam.questions {
        println!("  - {question}");
    }
}

fn init_logging_from_env() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("EXAMKIT_LOG_DIR") else {
        return Ok(());
    };
    let level =
        std::env::var("EXAMKIT_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &log_dir)
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::error::ErrorKind;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_flags_and_query() {
        let args =
            CliArgs::try_parse_from(["examkit_cli", "--db", "/tmp/catalog.db", "--slow", "Security"])
                .unwrap();

        assert_eq!(args.db, Some(PathBuf::from("/tmp/catalog.db")));
        assert!(args.slow);
        assert_eq!(args.query.as_deref(), Some("Security"));
    }

    #[test]
    fn defaults_to_in_memory_catalog_without_query() {
        let args = CliArgs::try_parse_from(["examkit_cli"]).unwrap();

        assert_eq!(args.db, None);
        assert!(!args.slow);
        assert_eq!(args.query, None);
    }

    #[test]
    fn rejects_unknown_flags_and_missing_values() {
        let unknown = CliArgs::try_parse_from(["examkit_cli", "--fast"]).unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::UnknownArgument);

        assert!(CliArgs::try_parse_from(["examkit_cli", "--db"]).is_err());
        assert!(CliArgs::try_parse_from(["examkit_cli", "a", "b"]).is_err());
    }
}
