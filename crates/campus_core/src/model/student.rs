//! Student record model.
//!
//! # Invariants
//! - `status` text matches the relational `students.status` column values.
//! - Email uniqueness is a relational-backend constraint only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned student identifier.
pub type StudentId = i64;

/// Enrollment state of a student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentStatus {
    #[default]
    Active,
    Graduated,
    Dropped,
}

impl StudentStatus {
    /// Text stored in the database and used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Graduated => "Graduated",
            Self::Dropped => "Dropped",
        }
    }
}

impl Display for StudentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown student status `{}`; expected Active|Graduated|Dropped",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for StudentStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Active" => Ok(Self::Active),
            "Graduated" => Ok(Self::Graduated),
            "Dropped" => Ok(Self::Dropped),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned; `0` on records that have not been persisted yet.
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub status: StudentStatus,
}

impl Student {
    /// Creates an unsaved active student with the required fields set.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            date_of_birth: None,
            enrollment_date: None,
            status: StudentStatus::Active,
        }
    }

    /// Copies every mutable field from `source`, keeping `self.id`.
    pub fn overwrite_from(&mut self, source: &Student) {
        self.first_name.clone_from(&source.first_name);
        self.last_name.clone_from(&source.last_name);
        self.email.clone_from(&source.email);
        self.phone.clone_from(&source.phone);
        self.date_of_birth = source.date_of_birth;
        self.enrollment_date = source.enrollment_date;
        self.status = source.status;
    }
}
