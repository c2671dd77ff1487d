use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The default course listing filters on the active flag
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_active")
                    .table(Courses::Table)
                    .col(Courses::Active)
                    .to_owned(),
            )
            .await?;

        // Index on students.course_id for the nested course join
        manager
            .create_index(
                Index::create()
                    .name("idx_students_course_id")
                    .table(Students::Table)
                    .col(Students::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_students_course_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_active").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Active,
}

#[derive(Iden)]
enum Students {
    Table,
    CourseId,
}
