use campus_core::{Course, Student, StudentStatus, DEFAULT_COURSE_CAPACITY};
use chrono::NaiveDate;

#[test]
fn student_new_sets_defaults() {
    let student = Student::new("ada", "lovelace", "ada@example.com");

    assert_eq!(student.id, 0);
    assert_eq!(student.status, StudentStatus::Active);
    assert_eq!(student.phone, None);
    assert_eq!(student.date_of_birth, None);
    assert_eq!(student.enrollment_date, None);
}

#[test]
fn student_status_parses_stored_text_only() {
    assert_eq!("Graduated".parse::<StudentStatus>().unwrap(), StudentStatus::Graduated);
    assert_eq!(StudentStatus::Dropped.to_string(), "Dropped");

    let err = "graduated".parse::<StudentStatus>().unwrap_err();
    assert!(err.to_string().contains("graduated"));
}

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let mut student = Student::new("ada", "lovelace", "ada@example.com");
    student.id = 4;
    student.phone = Some("555-0100".to_string());
    student.date_of_birth = NaiveDate::from_ymd_opt(2001, 12, 10);
    student.status = StudentStatus::Graduated;

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["first_name"], "ada");
    assert_eq!(json["phone"], "555-0100");
    assert_eq!(json["date_of_birth"], "2001-12-10");
    assert!(json["enrollment_date"].is_null());
    assert_eq!(json["status"], "Graduated");

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn course_deserialization_defaults_missing_capacity() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": 0,
        "name": "databases",
        "description": "relational modelling",
        "credits": 3,
        "instructor": "e. codd",
        "schedule": "friday 10:00-12:00"
    }))
    .unwrap();

    assert_eq!(course.capacity, DEFAULT_COURSE_CAPACITY);
    assert_eq!(course.available_seats, DEFAULT_COURSE_CAPACITY);
}

#[test]
fn student_overwrite_copies_every_mutable_field() {
    let mut stored = Student::new("old", "name", "old@example.com");
    stored.id = 2;

    let mut update = Student::new("new", "surname", "new@example.com");
    update.id = 50;
    update.phone = Some("555-0199".to_string());
    update.enrollment_date = NaiveDate::from_ymd_opt(2024, 9, 1);
    update.status = StudentStatus::Dropped;

    stored.overwrite_from(&update);
    assert_eq!(stored.id, 2);
    assert_eq!(Student { id: 50, ..stored }, update);
}
