use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Title).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Courses::Description)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Courses::WorkloadHours).integer().not_null())
                    .col(ColumnDef::new(Courses::ExerciseCount).integer().not_null())
                    .col(
                        ColumnDef::new(Courses::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::FirstName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::LastName).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Age).integer().not_null())
                    .col(
                        ColumnDef::new(Students::Cpf)
                            .char_len(11)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::CourseId).integer())
                    .col(ColumnDef::new(Students::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).timestamp().not_null())
                    // Deleting a course never fails on enrolled students, it unlinks them
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-students-course_id")
                            .from(Students::Table, Students::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    WorkloadHours,
    ExerciseCount,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Age,
    Cpf,
    CourseId,
    CreatedAt,
    UpdatedAt,
}
