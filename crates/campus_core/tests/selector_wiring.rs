use campus_core::{build_repositories, AppConfig, DbLocation, Student, StorageMode};

#[test]
fn development_env_wires_seeded_in_memory_services() {
    let config = AppConfig::default();
    let repos = build_repositories(&config).unwrap();
    assert_eq!(repos.mode, StorageMode::InMemory);

    let (students, courses) = repos.into_services();
    assert_eq!(students.get_all_students().unwrap().len(), 2);

    let courses = courses.get_all_courses().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "golang");
}

#[test]
fn production_env_wires_relational_services() {
    let config = AppConfig {
        env: "production".to_string(),
        db_location: DbLocation::Memory,
        ..AppConfig::default()
    };
    let repos = build_repositories(&config).unwrap();
    assert_eq!(repos.mode, StorageMode::Relational);

    let (mut students, courses) = repos.into_services();
    assert!(students.get_all_students().unwrap().is_empty());
    assert!(courses.get_all_courses().unwrap().is_empty());

    let id = students
        .add_student(&Student::new("ada", "lovelace", "ada@example.com"))
        .unwrap();
    assert_eq!(students.get_student_by_id(id).unwrap().email, "ada@example.com");
}

#[test]
fn production_env_fails_when_database_cannot_open() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        env: "production".to_string(),
        db_location: DbLocation::File(dir.path().join("missing").join("campus.sqlite3")),
        ..AppConfig::default()
    };

    assert!(build_repositories(&config).is_err());
}
