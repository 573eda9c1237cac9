//! Command-line front end for campus records.
//!
//! # Responsibility
//! - Load configuration, start logging, and wire the selected backend.
//! - Run one record command against the services and print JSON.
//!
//! # Invariants
//! - Backend construction failure exits non-zero before any command runs.
//! - The in-memory backend lives for one invocation only.

use campus_core::{
    build_repositories, init_logging, AppConfig, Course, CourseId, CourseRepository,
    CourseService, Student, StudentId, StudentRepository, StudentService, StudentStatus,
    DEFAULT_COURSE_CAPACITY,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::process::ExitCode;

/// Manage student and course records.
#[derive(Parser, Debug)]
#[command(name = "campus", version)]
struct Cli {
    /// Environment name; overrides APP_ENV (`production` uses SQLite).
    #[arg(long, global = true)]
    env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Student records.
    #[command(subcommand)]
    Students(StudentCommand),
    /// Course records.
    #[command(subcommand)]
    Courses(CourseCommand),
}

#[derive(Subcommand, Debug)]
enum StudentCommand {
    List,
    Get { id: StudentId },
    Add(StudentFields),
    Update {
        id: StudentId,
        #[command(flatten)]
        fields: StudentFields,
    },
    Delete { id: StudentId },
}

#[derive(Subcommand, Debug)]
enum CourseCommand {
    List,
    Get { id: CourseId },
    Add(CourseFields),
    Update {
        id: CourseId,
        #[command(flatten)]
        fields: CourseFields,
    },
    Delete { id: CourseId },
}

#[derive(Args, Debug)]
struct StudentFields {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: Option<String>,
    /// Format: YYYY-MM-DD.
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,
    /// Format: YYYY-MM-DD.
    #[arg(long)]
    enrollment_date: Option<NaiveDate>,
    /// Active, Graduated or Dropped.
    #[arg(long, default_value = "Active")]
    status: StudentStatus,
}

impl From<StudentFields> for Student {
    fn from(fields: StudentFields) -> Self {
        Student {
            phone: fields.phone,
            date_of_birth: fields.date_of_birth,
            enrollment_date: fields.enrollment_date,
            status: fields.status,
            ..Student::new(fields.first_name, fields.last_name, fields.email)
        }
    }
}

#[derive(Args, Debug)]
struct CourseFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: String,
    #[arg(long, default_value_t = 0)]
    credits: i64,
    #[arg(long, default_value = "")]
    instructor: String,
    #[arg(long, default_value = "")]
    schedule: String,
    /// Ignored on add by the SQLite backend.
    #[arg(long, default_value_t = DEFAULT_COURSE_CAPACITY)]
    capacity: i64,
    #[arg(long, default_value_t = DEFAULT_COURSE_CAPACITY)]
    available_seats: i64,
}

impl From<CourseFields> for Course {
    fn from(fields: CourseFields) -> Self {
        Course {
            credits: fields.credits,
            instructor: fields.instructor,
            schedule: fields.schedule,
            capacity: fields.capacity,
            available_seats: fields.available_seats,
            ..Course::new(fields.name, fields.description)
        }
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=command module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(|name| std::env::var(name).ok(), cli.env)?;
    init_logging(config.log_level, config.log_dir.as_deref())
        .map_err(|message| anyhow!(message))
        .context("failed to initialize logging")?;
    info!(
        "event=startup module=cli status=start env={} version={}",
        config.env,
        campus_core::core_version()
    );

    let (mut students, mut courses) = build_repositories(&config)
        .with_context(|| format!("failed to build repositories for env `{}`", config.env))?
        .into_services();
    match cli.command {
        Command::Students(command) => run_students(&mut students, command),
        Command::Courses(command) => run_courses(&mut courses, command),
    }
}

/// Reads configuration through `lookup`; `--env` wins over `APP_ENV`.
fn load_config(
    lookup: impl Fn(&str) -> Option<String>,
    env_override: Option<String>,
) -> Result<AppConfig> {
    let mut config = AppConfig::from_lookup(lookup).context("failed to load configuration")?;
    if let Some(env) = env_override {
        config.env = env;
    }
    Ok(config)
}

fn run_students<R: StudentRepository>(
    service: &mut StudentService<R>,
    command: StudentCommand,
) -> Result<()> {
    match command {
        StudentCommand::List => print_json(&service.get_all_students()?),
        StudentCommand::Get { id } => print_json(&service.get_student_by_id(id)?),
        StudentCommand::Add(fields) => {
            let id = service.add_student(&fields.into())?;
            print_json(&service.get_student_by_id(id)?)
        }
        StudentCommand::Update { id, fields } => {
            service.update_student(id, &fields.into())?;
            print_json(&service.get_student_by_id(id)?)
        }
        StudentCommand::Delete { id } => {
            service.delete_student(id)?;
            println!("deleted student {id}");
            Ok(())
        }
    }
}

fn run_courses<R: CourseRepository>(
    service: &mut CourseService<R>,
    command: CourseCommand,
) -> Result<()> {
    match command {
        CourseCommand::List => print_json(&service.get_all_courses()?),
        CourseCommand::Get { id } => print_json(&service.get_course_by_id(id)?),
        CourseCommand::Add(fields) => {
            let id = service.add_course(&fields.into())?;
            print_json(&service.get_course_by_id(id)?)
        }
        CourseCommand::Update { id, fields } => {
            service.update_course(id, &fields.into())?;
            print_json(&service.get_course_by_id(id)?)
        }
        CourseCommand::Delete { id } => {
            service.delete_course(id)?;
            println!("deleted course {id}");
            Ok(())
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_config, Cli, Command, StudentCommand};
    use campus_core::{Student, StorageMode, StudentStatus};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn student_add_parses_into_record() {
        let cli = Cli::try_parse_from([
            "campus",
            "--env",
            "production",
            "students",
            "add",
            "--first-name",
            "ada",
            "--last-name",
            "lovelace",
            "--email",
            "ada@example.com",
            "--date-of-birth",
            "1815-12-10",
            "--status",
            "Graduated",
        ])
        .unwrap();

        assert_eq!(cli.env.as_deref(), Some("production"));
        let Command::Students(StudentCommand::Add(fields)) = cli.command else {
            panic!("expected students add");
        };
        let student = Student::from(fields);
        assert_eq!(student.email, "ada@example.com");
        assert_eq!(student.status, StudentStatus::Graduated);
        assert_eq!(student.date_of_birth.unwrap().to_string(), "1815-12-10");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = Cli::try_parse_from([
            "campus",
            "students",
            "add",
            "--first-name",
            "a",
            "--last-name",
            "b",
            "--email",
            "c@example.com",
            "--status",
            "Suspended",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn env_flag_overrides_environment_variable() {
        let config = load_config(
            |name| (name == "APP_ENV").then(|| "development".to_string()),
            Some("production".to_string()),
        )
        .unwrap();
        assert_eq!(config.storage_mode(), StorageMode::Relational);
    }

    #[test]
    fn config_errors_carry_context() {
        let err = load_config(
            |name| (name == "CAMPUS_LOG_LEVEL").then(|| "loud".to_string()),
            None,
        )
        .unwrap_err();

        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("failed to load configuration"));
        assert!(rendered.contains("CAMPUS_LOG_LEVEL"));
    }
}
