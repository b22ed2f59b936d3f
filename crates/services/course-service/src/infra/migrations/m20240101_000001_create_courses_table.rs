//! Migration: Create the courses table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::TutorUuid).uuid().not_null())
                    .col(ColumnDef::new(Courses::TutorName).string().not_null())
                    .col(ColumnDef::new(Courses::TutorLastname).string().not_null())
                    .col(ColumnDef::new(Courses::TutorFaculty).string().not_null())
                    .col(ColumnDef::new(Courses::TutorLecturerOf).string().not_null())
                    .to_owned(),
            )
            .await?;

        // The tutor cap is checked by counting courses per tutor
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_tutor_uuid")
                    .table(Courses::Table)
                    .col(Courses::TutorUuid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Courses {
    Table,
    Id,
    Name,
    TutorUuid,
    TutorName,
    TutorLastname,
    TutorFaculty,
    TutorLecturerOf,
}
