use super::{ensure_changed, text_or_empty};
use crate::db::schema::ensure_courses_table;
use crate::db::{lock, SharedConnection};
use crate::model::course::{Course, CourseId, DEFAULT_COURSE_CAPACITY};
use crate::repo::{CourseRepository, Entity, RepoError, RepoResult};
use log::{debug, error};
use rusqlite::{params, Row};

const COURSE_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    credits,
    instructor,
    schedule,
    capacity,
    available_seats
FROM courses";

/// SQLite-backed course repository.
///
/// Inserts leave `capacity` and `available_seats` to their column defaults.
pub struct SqliteCourseRepository {
    conn: SharedConnection,
}

impl SqliteCourseRepository {
    /// Ensures the `courses` table exists and returns a repository over it.
    pub fn try_new(conn: SharedConnection) -> RepoResult<Self> {
        {
            let guard = lock(&conn)?;
            ensure_courses_table(&guard).map_err(|err| {
                error!("event=schema_ensure module=repo.sqlite status=error table=courses error={err}");
                err
            })?;
        }
        Ok(Self { conn })
    }
}

impl CourseRepository for SqliteCourseRepository {
    fn get_all_courses(&self) -> RepoResult<Vec<Course>> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{COURSE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();

        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }

        Ok(courses)
    }

    fn add_course(&mut self, course: &Course) -> RepoResult<CourseId> {
        let conn = lock(&self.conn)?;
        conn.execute(
            "INSERT INTO courses (
                name,
                description,
                credits,
                instructor,
                schedule
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                course.name.as_str(),
                course.description.as_str(),
                course.credits,
                course.instructor.as_str(),
                course.schedule.as_str(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!("event=course_add module=repo.sqlite status=ok id={id}");
        Ok(id)
    }

    fn get_course_by_id(&self, id: CourseId) -> RepoResult<Course> {
        let conn = lock(&self.conn)?;
        let mut stmt = conn.prepare(&format!("{COURSE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return parse_course_row(row);
        }

        Err(RepoError::NotFound {
            entity: Entity::Course,
            id,
        })
    }

    fn update_course(&mut self, id: CourseId, course: &Course) -> RepoResult<()> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute(
            "UPDATE courses
             SET
                name = ?1,
                description = ?2,
                credits = ?3,
                instructor = ?4,
                schedule = ?5,
                capacity = ?6,
                available_seats = ?7
             WHERE id = ?8;",
            params![
                course.name.as_str(),
                course.description.as_str(),
                course.credits,
                course.instructor.as_str(),
                course.schedule.as_str(),
                course.capacity,
                course.available_seats,
                id,
            ],
        )?;

        ensure_changed(changed, Entity::Course, id)
    }

    fn delete_course(&mut self, id: CourseId) -> RepoResult<()> {
        let conn = lock(&self.conn)?;
        let changed = conn.execute("DELETE FROM courses WHERE id = ?1;", [id])?;
        ensure_changed(changed, Entity::Course, id)
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    Ok(Course {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        credits: row.get::<_, Option<i64>>("credits")?.unwrap_or_default(),
        instructor: text_or_empty(row, "instructor")?,
        schedule: text_or_empty(row, "schedule")?,
        capacity: row
            .get::<_, Option<i64>>("capacity")?
            .unwrap_or(DEFAULT_COURSE_CAPACITY),
        available_seats: row
            .get::<_, Option<i64>>("available_seats")?
            .unwrap_or(DEFAULT_COURSE_CAPACITY),
    })
}
