//! Record model for student and course data.
//!
//! # Responsibility
//! - Define the plain data shapes shared by every storage backend.
//!
//! # Invariants
//! - Identifiers are assigned by the store; values carried on input records
//!   passed to add/update are ignored.

pub mod course;
pub mod student;
