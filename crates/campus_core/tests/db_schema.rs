use campus_core::db::schema::{ensure_courses_table, ensure_students_table};
use campus_core::db::{open_db_in_memory, shared};
use campus_core::{SqliteCourseRepository, SqliteStudentRepository};
use rusqlite::Connection;

#[test]
fn repositories_create_their_tables() {
    let conn = shared(open_db_in_memory().unwrap());
    assert!(!table_exists(&conn.lock().unwrap(), "students"));

    SqliteStudentRepository::try_new(conn.clone()).unwrap();
    assert!(table_exists(&conn.lock().unwrap(), "students"));
    assert!(!table_exists(&conn.lock().unwrap(), "courses"));

    SqliteCourseRepository::try_new(conn.clone()).unwrap();
    assert!(table_exists(&conn.lock().unwrap(), "courses"));
}

#[test]
fn ensure_table_twice_leaves_one_table() {
    let conn = open_db_in_memory().unwrap();
    ensure_students_table(&conn).unwrap();
    ensure_students_table(&conn).unwrap();
    ensure_courses_table(&conn).unwrap();
    ensure_courses_table(&conn).unwrap();

    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('students', 'courses');",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 2);
}

#[test]
fn students_schema_rejects_unknown_status() {
    let conn = open_db_in_memory().unwrap();
    ensure_students_table(&conn).unwrap();

    let result = conn.execute(
        "INSERT INTO students (first_name, last_name, email, status)
         VALUES ('a', 'b', 'a@example.com', 'Suspended');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn courses_schema_declares_expected_columns() {
    let conn = open_db_in_memory().unwrap();
    ensure_courses_table(&conn).unwrap();

    let mut stmt = conn.prepare("PRAGMA table_info(courses);").unwrap();
    let columns: Vec<(String, Option<String>)> = stmt
        .query_map([], |row| Ok((row.get(1)?, row.get(4)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "id",
            "name",
            "description",
            "credits",
            "instructor",
            "schedule",
            "capacity",
            "available_seats"
        ]
    );
    assert_eq!(columns[6].1.as_deref(), Some("50"));
    assert_eq!(columns[7].1.as_deref(), Some("50"));
}

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    exists == 1
}
