//! In-memory repository backend.
//!
//! # Responsibility
//! - Serve both repository contracts from process memory for development.
//!
//! # Invariants
//! - Each instance owns its records; seed data is cloned per construction.
//! - Record order is insertion order and deletes preserve the relative order.
//! - Lookups are linear scans; there is no index.
//! - Mutation needs `&mut self`; sharing an instance across threads requires
//!   external synchronization.

mod course;
mod student;

pub use course::{seed_courses, InMemoryCourseRepository};
pub use student::{seed_students, InMemoryStudentRepository};

use super::{Entity, RepoError, RepoResult};

/// Identifier assignment policy for in-memory adds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `current length + 1`. Reuses identifiers once deletions occur and can
    /// collide with a surviving record.
    #[default]
    LengthPlusOne,
    /// Strictly increasing counter that never hands out an id twice.
    Monotonic,
}

pub(crate) trait Keyed: Clone {
    const ENTITY: Entity;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn overwrite_from(&mut self, source: &Self);
}

/// Ordered record storage shared by the student and course repositories.
#[derive(Debug, Clone)]
pub(crate) struct RecordTable<T> {
    records: Vec<T>,
    strategy: IdStrategy,
    last_assigned: i64,
}

impl<T: Keyed> RecordTable<T> {
    pub(crate) fn new(records: Vec<T>, strategy: IdStrategy) -> Self {
        let last_assigned = records.iter().map(Keyed::id).max().unwrap_or(0);
        Self {
            records,
            strategy,
            last_assigned,
        }
    }

    pub(crate) fn set_strategy(&mut self, strategy: IdStrategy) {
        self.strategy = strategy;
    }

    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    pub(crate) fn insert(&mut self, record: &T) -> i64 {
        let id = match self.strategy {
            IdStrategy::LengthPlusOne => self.records.len() as i64 + 1,
            IdStrategy::Monotonic => self.last_assigned + 1,
        };
        self.last_assigned = self.last_assigned.max(id);

        let mut stored = record.clone();
        stored.set_id(id);
        self.records.push(stored);
        id
    }

    pub(crate) fn get(&self, id: i64) -> RepoResult<T> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    pub(crate) fn update(&mut self, id: i64, source: &T) -> RepoResult<()> {
        let stored = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        stored.overwrite_from(source);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: i64) -> RepoResult<()> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        self.records.remove(index);
        Ok(())
    }
}

fn not_found<T: Keyed>(id: i64) -> RepoError {
    RepoError::NotFound {
        entity: T::ENTITY,
        id,
    }
}
