//! Migration: Create the course_students enrollment table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_courses_table::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseStudents::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseStudents::StudentUuid).uuid().not_null())
                    .col(ColumnDef::new(CourseStudents::Name).string().not_null())
                    .col(ColumnDef::new(CourseStudents::Lastname).string().not_null())
                    .col(ColumnDef::new(CourseStudents::Faculty).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(CourseStudents::CourseId)
                            .col(CourseStudents::StudentUuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_students_course")
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The student cap is checked by counting enrollments per student
        manager
            .create_index(
                Index::create()
                    .name("idx_course_students_student_uuid")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::StudentUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CourseStudents {
    Table,
    CourseId,
    StudentUuid,
    Name,
    Lastname,
    Faculty,
}
