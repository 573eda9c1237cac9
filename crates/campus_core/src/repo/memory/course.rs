use super::{IdStrategy, Keyed, RecordTable};
use crate::model::course::{Course, CourseId};
use crate::repo::{CourseRepository, Entity, RepoResult};
use log::debug;

/// Fixture courses loaded by [`InMemoryCourseRepository::new`].
pub fn seed_courses() -> Vec<Course> {
    let mut golang = Course::new(
        "golang",
        "this course covers basic go concepts to start go development journey",
    );
    golang.id = 1;
    golang.credits = 100;
    golang.instructor = "neha chimanpure".to_string();
    golang.schedule = "monday 01:00-02:00".to_string();
    vec![golang]
}

impl Keyed for Course {
    const ENTITY: Entity = Entity::Course;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn overwrite_from(&mut self, source: &Self) {
        Course::overwrite_from(self, source);
    }
}

/// Development course store held in process memory.
#[derive(Debug, Clone)]
pub struct InMemoryCourseRepository {
    table: RecordTable<Course>,
}

impl InMemoryCourseRepository {
    /// Creates a store seeded with [`seed_courses`].
    pub fn new() -> Self {
        Self::with_records(seed_courses())
    }

    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(courses: Vec<Course>) -> Self {
        Self {
            table: RecordTable::new(courses, IdStrategy::default()),
        }
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.table.set_strategy(strategy);
        self
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn get_all_courses(&self) -> RepoResult<Vec<Course>> {
        Ok(self.table.snapshot())
    }

    fn add_course(&mut self, course: &Course) -> RepoResult<CourseId> {
        let id = self.table.insert(course);
        debug!("event=course_add module=repo.memory status=ok id={id}");
        Ok(id)
    }

    fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course> {
        self.table.get(id)
    }

    fn update_course(&mut self, id: CourseId, course: &Course) -> RepoResult<()> {
        self.table.update(id, course)
    }

    fn delete_course(&mut self, id: CourseId) -> RepoResult<()> {
        self.table.remove(id)?;
        debug!("event=course_delete module=repo.memory status=ok id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryCourseRepository;
    use crate::repo::CourseRepository;

    #[test]
    fn instances_do_not_share_seed_state() {
        let mut first = InMemoryCourseRepository::new();
        first.delete_course(1).unwrap();

        let second = InMemoryCourseRepository::new();
        assert!(first.get_all_courses().unwrap().is_empty());
        assert_eq!(second.get_all_courses().unwrap().len(), 1);
    }
}
