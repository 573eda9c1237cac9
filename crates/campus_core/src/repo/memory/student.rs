use super::{IdStrategy, Keyed, RecordTable};
use crate::model::student::{Student, StudentId, StudentStatus};
use crate::repo::{Entity, RepoResult, StudentRepository};
use log::debug;

/// Fixture students loaded by [`InMemoryStudentRepository::new`].
pub fn seed_students() -> Vec<Student> {
    vec![
        seed_student(1, "neha", "chimanpure", "neha@example.com"),
        seed_student(2, "aditi", "kasar", "aditi@example.com"),
    ]
}

fn seed_student(id: StudentId, first_name: &str, last_name: &str, email: &str) -> Student {
    Student {
        id,
        status: StudentStatus::Active,
        ..Student::new(first_name, last_name, email)
    }
}

impl Keyed for Student {
    const ENTITY: Entity = Entity::Student;

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn overwrite_from(&mut self, source: &Self) {
        Student::overwrite_from(self, source);
    }
}

/// Development student store held in process memory.
#[derive(Debug, Clone)]
pub struct InMemoryStudentRepository {
    table: RecordTable<Student>,
}

impl InMemoryStudentRepository {
    /// Creates a store seeded with [`seed_students`].
    pub fn new() -> Self {
        Self::with_records(seed_students())
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a store holding `students` as-is, ids included.
    pub fn with_records(students: Vec<Student>) -> Self {
        Self {
            table: RecordTable::new(students, IdStrategy::default()),
        }
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.table.set_strategy(strategy);
        self
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn get_all_students(&self) -> RepoResult<Vec<Student>> {
        Ok(self.table.snapshot())
    }

    fn add_student(&mut self, student: &Student) -> RepoResult<StudentId> {
        let id = self.table.insert(student);
        debug!("event=student_add module=repo.memory status=ok id={id}");
        Ok(id)
    }

    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student> {
        self.table.get(id)
    }

    fn update_student(&mut self, id: StudentId, student: &Student) -> RepoResult<()> {
        self.table.update(id, student)
    }

    fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        self.table.remove(id)?;
        debug!("event=student_delete module=repo.memory status=ok id={id}");
        Ok(())
    }
}
