use super::ensure_changed;
use crate::db::schema::ensure_students_table;
use crate::db::{lock, SharedConnection};
use crate::model::student::{Student, StudentId, StudentStatus};
use crate::repo::{Entity, RepoError, RepoResult, StudentRepository};
use log::{debug, error};
use rusqlite::{params, Row};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    phone,
    date_of_birth,
    enrollment_date,
    status
FROM students";

/// SQLite-backed student repository.
pub struct SqliteStudentRepository {
    conn: SharedConnection,
}

impl SqliteStudentRepository {
    /// Ensures the `students` table exists and returns a repository over it.
    ///
    /// Safe to call repeatedly against the same database.
    pub fn try_new(conn: SharedConnection) -> RepoResult<Self> {
        {
            let guard = lock(&conn)?;
            ensure_students_table(&guard).map_err(|err| {
                error!("event=schema_ensure module=repo.sqlite status=error table=students error={err}");
                err
            })?;
        }
        Ok(Self { conn })
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn get_all_students(&self) -> RepoResult<Vec<Student>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn add_student(&mut self, student: &Student) -> RepoResult<StudentId> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO students (
                first_name,
                last_name,
                email,
                phone,
                date_of_birth,
                enrollment_date,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                student.first_name.as_str(),
                student.last_name.as_str(),
                student.email.as_str(),
                student.phone.as_deref(),
                student.date_of_birth,
                student.enrollment_date,
                student.status.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!("event=student_add module=repo.sqlite status=ok id={id}");
        Ok(id)
    }

    fn get_student_by_id(&self, id: StudentId) -> RepoResult<Student> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return parse_student_row(row);
        }

        Err(RepoError::NotFound {
            entity: Entity::Student,
            id,
        })
    }

    fn update_student(&mut self, id: StudentId, student: &Student) -> RepoResult<()> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute(
            "UPDATE students
             SET
                first_name = ?1,
                last_name = ?2,
                email = ?3,
                phone = ?4,
                date_of_birth = ?5,
                enrollment_date = ?6,
                status = ?7
             WHERE id = ?8;",
            params![
                student.first_name.as_str(),
                student.last_name.as_str(),
                student.email.as_str(),
                student.phone.as_deref(),
                student.date_of_birth,
                student.enrollment_date,
                student.status.as_str(),
                id,
            ],
        )?;

        ensure_changed(changed, Entity::Student, id)
    }

    fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute("DELETE FROM students WHERE id = ?1;", [id])?;
        ensure_changed(changed, Entity::Student, id)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let status_text: String = row.get("status")?;
    let status = status_text.parse::<StudentStatus>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid status `{status_text}` in students.status"
        ))
    })?;

    Ok(Student {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        date_of_birth: row.get("date_of_birth")?,
        enrollment_date: row.get("enrollment_date")?,
        status,
    })
}
