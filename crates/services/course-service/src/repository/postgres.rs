//! PostgreSQL course store backed by SeaORM.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    Statement, TransactionTrait,
};
use uuid::Uuid;

use super::entities::course::{self, Entity as CourseEntity};
use super::entities::course_student::{self, Entity as CourseStudentEntity};
use super::CourseRepository;
use common::{AppError, AppResult};
use domain::{Course, Student};

/// Concrete implementation of CourseRepository on PostgreSQL
pub struct PostgresCourseStore {
    db: DatabaseConnection,
}

impl PostgresCourseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach the enrollment rows to the given course rows.
    async fn hydrate(&self, rows: Vec<course::Model>) -> AppResult<Vec<Course>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut students: HashMap<Uuid, BTreeMap<Uuid, Student>> = HashMap::new();
        for enrollment in CourseStudentEntity::find()
            .filter(course_student::Column::CourseId.is_in(ids))
            .all(&self.db)
            .await?
        {
            students
                .entry(enrollment.course_id)
                .or_default()
                .insert(enrollment.student_uuid, Student::from(enrollment));
        }

        Ok(rows
            .into_iter()
            .map(|row| Course {
                uuid: row.id,
                tutor: row.tutor(),
                students: students.remove(&row.id).unwrap_or_default(),
                name: row.name,
            })
            .collect())
    }
}

fn course_row(course: &Course) -> course::ActiveModel {
    course::ActiveModel {
        id: Set(course.uuid),
        name: Set(course.name.clone()),
        tutor_uuid: Set(course.tutor.uuid()),
        tutor_name: Set(course.tutor.user.name.clone()),
        tutor_lastname: Set(course.tutor.user.lastname.clone()),
        tutor_faculty: Set(course.tutor.faculty.clone()),
        tutor_lecturer_of: Set(course.tutor.lecturer_of.clone()),
    }
}

fn enrollment_rows(course: &Course) -> Vec<course_student::ActiveModel> {
    course
        .students
        .values()
        .map(|student| course_student::ActiveModel {
            course_id: Set(course.uuid),
            student_uuid: Set(student.uuid()),
            name: Set(student.user.name.clone()),
            lastname: Set(student.user.lastname.clone()),
            faculty: Set(student.faculty.clone()),
        })
        .collect()
}

async fn insert_enrollments<C: ConnectionTrait>(conn: &C, course: &Course) -> AppResult<()> {
    let rows = enrollment_rows(course);
    if rows.is_empty() {
        return Ok(());
    }
    CourseStudentEntity::insert_many(rows).exec(conn).await?;
    Ok(())
}

#[async_trait]
impl CourseRepository for PostgresCourseStore {
    async fn by_id(&self, course_uuid: Uuid) -> AppResult<Option<Course>> {
        let row = CourseEntity::find_by_id(course_uuid)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn by_tutor(&self, tutor_uuid: Uuid) -> AppResult<Vec<Course>> {
        let rows = CourseEntity::find()
            .filter(course::Column::TutorUuid.eq(tutor_uuid))
            .order_by_asc(course::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.hydrate(rows).await
    }

    async fn by_student(&self, student_uuid: Uuid) -> AppResult<Vec<Course>> {
        let course_ids: Vec<Uuid> = CourseStudentEntity::find()
            .filter(course_student::Column::StudentUuid.eq(student_uuid))
            .all(&self.db)
            .await
            .map_err(AppError::from)?
            .into_iter()
            .map(|enrollment| enrollment.course_id)
            .collect();

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = CourseEntity::find()
            .filter(course::Column::Id.is_in(course_ids))
            .order_by_asc(course::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.hydrate(rows).await
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let rows = CourseEntity::find()
            .order_by_asc(course::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        self.hydrate(rows).await
    }

    async fn create(&self, course: Course) -> AppResult<()> {
        let txn = self.db.begin().await?;

        CourseEntity::insert(course_row(&course)).exec(&txn).await?;
        insert_enrollments(&txn, &course).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn update(&self, course: Course) -> AppResult<()> {
        let txn = self.db.begin().await?;

        // Full replace: upsert the course row, then rewrite its enrollments
        CourseEntity::insert(course_row(&course))
            .on_conflict(
                OnConflict::column(course::Column::Id)
                    .update_columns([
                        course::Column::Name,
                        course::Column::TutorUuid,
                        course::Column::TutorName,
                        course::Column::TutorLastname,
                        course::Column::TutorFaculty,
                        course::Column::TutorLecturerOf,
                    ])
                    .to_owned(),
            )
            .exec(&txn)
            .await?;

        CourseStudentEntity::delete_many()
            .filter(course_student::Column::CourseId.eq(course.uuid))
            .exec(&txn)
            .await?;
        insert_enrollments(&txn, &course).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn delete(&self, course_uuid: Uuid) -> AppResult<()> {
        let txn = self.db.begin().await?;

        CourseStudentEntity::delete_many()
            .filter(course_student::Column::CourseId.eq(course_uuid))
            .exec(&txn)
            .await?;
        // Zero affected rows is fine: deleting an unknown course succeeds
        CourseEntity::delete_by_id(course_uuid).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
