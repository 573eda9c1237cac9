//! Student use-case service.

use crate::model::student::{Student, StudentId};
use crate::repo::{RepoResult, StudentRepository};

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_students(&self) -> RepoResult<Vec<Student>> {
        self.repo.get_all_students()
    }

    /// Persists a new student and returns its store-assigned id.
    pub fn add_student(&mut self, student: &Student) -> RepoResult<StudentId> {
        self.repo.add_student(student)
    }

    pub fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student> {
        self.repo.get_student_by_id(id)
    }

    /// Replaces all mutable fields of student `id`.
    ///
    /// Returns `RepoError::NotFound` unchanged when `id` is unknown.
    pub fn update_student(&mut self, id: StudentId, student: &Student) -> RepoResult<()> {
        self.repo.update_student(id, student)
    }

    pub fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        self.repo.delete_student(id)
    }
}
