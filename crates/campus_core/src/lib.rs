//! Core record storage for the campus records service.
//! Storage-agnostic repository contracts, their in-memory and SQLite
//! backends, and the startup wiring that chooses between them.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod selector;
pub mod service;

pub use config::{AppConfig, ConfigError, DbLocation};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{Course, CourseId, DEFAULT_COURSE_CAPACITY};
pub use model::student::{Student, StudentId, StudentStatus};
pub use repo::memory::{IdStrategy, InMemoryCourseRepository, InMemoryStudentRepository};
pub use repo::sqlite::{SqliteCourseRepository, SqliteStudentRepository};
pub use repo::{CourseRepository, Entity, RepoError, RepoResult, StudentRepository};
pub use selector::{build_repositories, Repositories, StartupError, StorageMode};
pub use service::course_service::CourseService;
pub use service::student_service::StudentService;

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
