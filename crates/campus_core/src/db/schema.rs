//! Table definitions for the relational backend.
//!
//! Column set mirrors the production MySQL layout; `AUTO_INCREMENT` maps to
//! `AUTOINCREMENT` and the status `ENUM` to a `CHECK` constraint.

use log::debug;
use rusqlite::Connection;

pub const STUDENTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    email VARCHAR(255) UNIQUE NOT NULL,
    phone VARCHAR(20),
    date_of_birth DATE,
    enrollment_date DATE,
    status TEXT NOT NULL CHECK (status IN ('Active', 'Graduated', 'Dropped'))
);";

pub const COURSES_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS courses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) UNIQUE NOT NULL,
    description VARCHAR(500) NOT NULL,
    credits INT,
    instructor VARCHAR(100),
    schedule VARCHAR(100),
    capacity INT DEFAULT 50,
    available_seats INT DEFAULT 50
);";

/// Creates the `students` table when missing.
pub fn ensure_students_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(STUDENTS_TABLE_SQL)?;
    debug!("event=schema_ensure module=db status=ok table=students");
    Ok(())
}

/// Creates the `courses` table when missing.
pub fn ensure_courses_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(COURSES_TABLE_SQL)?;
    debug!("event=schema_ensure module=db status=ok table=courses");
    Ok(())
}
