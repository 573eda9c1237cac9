//! Startup backend selection.
//!
//! # Responsibility
//! - Pick one storage backend per record type from the environment name.
//! - Construct it and hand it out behind the repository traits.
//!
//! # Invariants
//! - Selection happens once; nothing re-reads the discriminator afterwards.
//! - Relational wiring opens one connection shared by both repositories.
//! - Any construction failure is returned and must stop startup.

use crate::config::{AppConfig, DbLocation};
use crate::db::{open_db, open_db_in_memory, shared, DbError};
use crate::repo::memory::{InMemoryCourseRepository, InMemoryStudentRepository};
use crate::repo::sqlite::{SqliteCourseRepository, SqliteStudentRepository};
use crate::repo::{CourseRepository, RepoError, StudentRepository};
use crate::service::course_service::CourseService;
use crate::service::student_service::StudentService;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment name that selects the relational backend.
pub const PRODUCTION_ENV: &str = "production";

pub type DynStudentRepository = Box<dyn StudentRepository + Send>;
pub type DynCourseRepository = Box<dyn CourseRepository + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    InMemory,
    Relational,
}

impl StorageMode {
    /// `production` selects [`StorageMode::Relational`]; anything else is
    /// [`StorageMode::InMemory`]. Matching is exact.
    pub fn from_env_name(env: &str) -> Self {
        if env == PRODUCTION_ENV {
            Self::Relational
        } else {
            Self::InMemory
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InMemory => "in_memory",
            Self::Relational => "relational",
        }
    }
}

/// Backend construction failure at startup.
#[derive(Debug)]
pub enum StartupError {
    /// Database could not be opened.
    Db(DbError),
    /// Schema creation failed while constructing a repository.
    Repo(RepoError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "failed to open database: {err}"),
            Self::Repo(err) => write!(f, "failed to initialize repository: {err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StartupError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Repositories chosen for this process.
pub struct Repositories {
    pub mode: StorageMode,
    pub students: DynStudentRepository,
    pub courses: DynCourseRepository,
}

impl Repositories {
    /// Wraps both repositories in their use-case services.
    pub fn into_services(
        self,
    ) -> (
        StudentService<DynStudentRepository>,
        CourseService<DynCourseRepository>,
    ) {
        (
            StudentService::new(self.students),
            CourseService::new(self.courses),
        )
    }
}

/// Builds the repositories selected by `config`.
pub fn build_repositories(config: &AppConfig) -> Result<Repositories, StartupError> {
    let mode = config.storage_mode();
    info!(
        "event=backend_select module=selector status=start env={} mode={}",
        config.env,
        mode.as_str()
    );

    let result = match mode {
        StorageMode::InMemory => Ok(in_memory_repositories()),
        StorageMode::Relational => relational_repositories(&config.db_location),
    };

    match &result {
        Ok(_) => info!(
            "event=backend_select module=selector status=ok mode={}",
            mode.as_str()
        ),
        Err(err) => error!(
            "event=backend_select module=selector status=error mode={} error={err}",
            mode.as_str()
        ),
    }
    result
}

fn in_memory_repositories() -> Repositories {
    Repositories {
        mode: StorageMode::InMemory,
        students: Box::new(InMemoryStudentRepository::new()),
        courses: Box::new(InMemoryCourseRepository::new()),
    }
}

fn relational_repositories(location: &DbLocation) -> Result<Repositories, StartupError> {
    let conn = match location {
        DbLocation::File(path) => open_db(path)?,
        DbLocation::Memory => open_db_in_memory()?,
    };
    let conn = shared(conn);

    let students = SqliteStudentRepository::try_new(conn.clone())?;
    let courses = SqliteCourseRepository::try_new(conn)?;

    Ok(Repositories {
        mode: StorageMode::Relational,
        students: Box::new(students),
        courses: Box::new(courses),
    })
}

#[cfg(test)]
mod tests {
    use super::StorageMode;

    #[test]
    fn only_exact_production_selects_relational() {
        assert_eq!(StorageMode::from_env_name("production"), StorageMode::Relational);
        assert_eq!(StorageMode::from_env_name("development"), StorageMode::InMemory);
        assert_eq!(StorageMode::from_env_name("Production"), StorageMode::InMemory);
        assert_eq!(StorageMode::from_env_name(""), StorageMode::InMemory);
    }
}
