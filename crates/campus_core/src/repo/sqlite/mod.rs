//! SQLite repository backend.
//!
//! # Responsibility
//! - Map repository operations to single parameterized SQL statements.
//! - Create owned tables idempotently at construction.
//!
//! # Invariants
//! - No transactions or retries; every call is one statement.
//! - Update/delete affecting zero rows report `RepoError::NotFound`.
//! - An empty `get_by_id` result is `NotFound`; any other failure is `Db`.

mod course;
mod student;

pub use course::SqliteCourseRepository;
pub use student::SqliteStudentRepository;

use super::{Entity, RepoError, RepoResult};

fn ensure_changed(changed: usize, entity: Entity, id: i64) -> RepoResult<()> {
    if changed == 0 {
        return Err(RepoError::NotFound { entity, id });
    }
    Ok(())
}

/// Reads a nullable text column, treating NULL as empty.
fn text_or_empty(row: &rusqlite::Row<'_>, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}
