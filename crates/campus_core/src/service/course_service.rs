//! Course use-case service.

use crate::model::course::{Course, CourseId};
use crate::repo::{CourseRepository, RepoResult};

/// Use-case service wrapper for course CRUD operations.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all_courses(&self) -> RepoResult<Vec<Course>> {
        self.repo.get_all_courses()
    }

    pub fn add_course(&mut self, course: &Course) -> RepoResult<CourseId> {
        self.repo.add_course(course)
    }

    pub fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course> {
        self.repo.get_course_by_id(id)
    }

    pub fn update_course(&mut self, id: CourseId, course: &Course) -> RepoResult<()> {
        self.repo.update_course(id, course)
    }

    pub fn delete_course(&mut self, id: CourseId) -> RepoResult<()> {
        self.repo.delete_course(id)
    }
}
