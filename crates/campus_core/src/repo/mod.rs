//! Repository contracts and their storage backends.
//!
//! # Responsibility
//! - Define storage-agnostic CRUD contracts for students and courses.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Both backends report a missing identifier as `RepoError::NotFound`.
//! - Add always returns the store-assigned identifier; input ids are ignored.
//! - Database failures are surfaced unchanged as `RepoError::Db`, no retries.

use crate::db::DbError;
use crate::model::course::{Course, CourseId};
use crate::model::student::{Student, StudentId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub type RepoResult<T> = Result<T, RepoError>;

/// Record kind named in not-found errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Student,
    Course,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
        }
    }
}

/// Repository error shared by every backend.
#[derive(Debug)]
pub enum RepoError {
    /// No record with the requested identifier exists.
    NotFound { entity: Entity, id: i64 },
    /// Underlying database failure, including constraint violations.
    Db(DbError),
    /// A stored row could not be mapped to the record model.
    InvalidData(String),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, .. } => {
                write!(f, "{} with given id does not exists", entity.as_str())
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student records.
pub trait StudentRepository {
    fn get_all_students(&self) -> RepoResult<Vec<Student>>;
    fn add_student(&mut self, student: &Student) -> RepoResult<StudentId>;
    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student>;
    /// Overwrites every mutable field of the stored record.
    fn update_student(&mut self, id: StudentId, student: &Student) -> RepoResult<()>;
    fn delete_student(&mut self, id: StudentId) -> RepoResult<()>;
}

/// Repository interface for course records.
pub trait CourseRepository {
    fn get_all_courses(&self) -> RepoResult<Vec<Course>>;
    fn add_course(&mut self, course: &Course) -> RepoResult<CourseId>;
    fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course>;
    /// Overwrites every mutable field of the stored record.
    fn update_course(&mut self, id: CourseId, course: &Course) -> RepoResult<()>;
    fn delete_course(&mut self, id: CourseId) -> RepoResult<()>;
}

impl<R: StudentRepository + ?Sized> StudentRepository for Box<R> {
    fn get_all_students(&self) -> RepoResult<Vec<Student>> {
        (**self).get_all_students()
    }

    fn add_student(&mut self, student: &Student) -> RepoResult<StudentId> {
        (**self).add_student(student)
    }

    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student> {
        (**self).get_student_by_id(id)
    }

    fn update_student(&mut self, id: StudentId, student: &Student) -> RepoResult<()> {
        (**self).update_student(id, student)
    }

    fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        (**self).delete_student(id)
    }
}

impl<R: CourseRepository + ?Sized> CourseRepository for Box<R> {
    fn get_all_courses(&self) -> RepoResult<Vec<Course>> {
        (**self).get_all_courses()
    }

    fn add_course(&mut self, course: &Course) -> RepoResult<CourseId> {
        (**self).add_course(course)
    }

    fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course> {
        (**self).get_course_by_id(id)
    }

    fn update_course(&mut self, id: CourseId, course: &Course) -> RepoResult<()> {
        (**self).update_course(id, course)
    }

    fn delete_course(&mut self, id: CourseId) -> RepoResult<()> {
        (**self).delete_course(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, RepoError};
    use crate::db::DbError;

    #[test]
    fn not_found_message_names_entity() {
        let err = RepoError::NotFound {
            entity: Entity::Course,
            id: 3,
        };
        assert_eq!(err.to_string(), "course with given id does not exists");
        assert!(err.is_not_found());
    }

    #[test]
    fn db_errors_are_not_not_found() {
        let err = RepoError::from(DbError::LockPoisoned);
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
