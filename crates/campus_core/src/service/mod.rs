//! Use-case services over the repository contracts.
//!
//! # Responsibility
//! - Give callers one storage-agnostic entry point per record type.
//!
//! # Invariants
//! - Services never inspect which backend they wrap.
//! - Repository errors pass through unchanged.

pub mod course_service;
pub mod student_service;
