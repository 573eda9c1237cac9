//! Course record model.

use serde::{Deserialize, Serialize};

/// Store-assigned course identifier.
pub type CourseId = i64;

/// Seat count applied when a course does not specify one.
pub const DEFAULT_COURSE_CAPACITY: i64 = 50;

/// Course record.
///
/// `capacity` and `available_seats` default to [`DEFAULT_COURSE_CAPACITY`].
/// The relational backend always leaves them to column defaults on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned; `0` on records that have not been persisted yet.
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub credits: i64,
    pub instructor: String,
    pub schedule: String,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    #[serde(default = "default_capacity")]
    pub available_seats: i64,
}

fn default_capacity() -> i64 {
    DEFAULT_COURSE_CAPACITY
}

impl Course {
    /// Creates an unsaved course with default capacity and no schedule data.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            credits: 0,
            instructor: String::new(),
            schedule: String::new(),
            capacity: DEFAULT_COURSE_CAPACITY,
            available_seats: DEFAULT_COURSE_CAPACITY,
        }
    }

    /// Copies every mutable field from `source`, keeping `self.id`.
    pub fn overwrite_from(&mut self, source: &Course) {
        self.name.clone_from(&source.name);
        self.description.clone_from(&source.description);
        self.credits = source.credits;
        self.instructor.clone_from(&source.instructor);
        self.schedule.clone_from(&source.schedule);
        self.capacity = source.capacity;
        self.available_seats = source.available_seats;
    }
}

#[cfg(test)]
mod tests {
    use super::{Course, DEFAULT_COURSE_CAPACITY};

    #[test]
    fn new_course_uses_default_capacity() {
        let course = Course::new("rust", "ownership and borrowing");
        assert_eq!(course.id, 0);
        assert_eq!(course.capacity, DEFAULT_COURSE_CAPACITY);
        assert_eq!(course.available_seats, DEFAULT_COURSE_CAPACITY);
    }

    #[test]
    fn overwrite_keeps_identifier() {
        let mut stored = Course::new("rust", "intro");
        stored.id = 7;
        let mut update = Course::new("rust 2", "advanced");
        update.id = 99;
        update.credits = 4;
        update.capacity = 20;

        stored.overwrite_from(&update);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.name, "rust 2");
        assert_eq!(stored.credits, 4);
        assert_eq!(stored.capacity, 20);
    }
}
