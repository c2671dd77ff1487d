use crate::{entities::courses, error::ServiceError};
use chrono::Utc;
use log::info;
use models::course::CourseFields;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CourseService;

impl CourseService {
    /// Creates a course. New courses are always active.
    pub async fn create(
        db: &DatabaseConnection,
        fields: CourseFields,
    ) -> Result<courses::Model, ServiceError> {
        fields.validate()?;

        let now = Utc::now().naive_utc();
        let course = courses::ActiveModel {
            title: Set(fields.title),
            description: Set(fields.description),
            workload_hours: Set(fields.workload_hours),
            exercise_count: Set(fields.exercise_count),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!("Created course {} ({})", course.id, course.title);
        Ok(course)
    }

    /// Lists the active courses, oldest first
    pub async fn find_active(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
        courses::Entity::find()
            .filter(courses::Column::Active.eq(true))
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await
    }

    /// Looks up a course regardless of its active flag
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find_by_id(id).one(db).await
    }

    pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let count = courses::Entity::find_by_id(id).count(db).await?;
        Ok(count > 0)
    }

    /// Replaces the base fields of an existing course.
    ///
    /// The active flag is kept as is; use [`CourseService::set_active`] to change it.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        fields: CourseFields,
    ) -> Result<courses::Model, ServiceError> {
        let course = Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound("Course"))?;
        fields.validate()?;

        let mut course: courses::ActiveModel = course.into();
        course.title = Set(fields.title);
        course.description = Set(fields.description);
        course.workload_hours = Set(fields.workload_hours);
        course.exercise_count = Set(fields.exercise_count);
        course.updated_at = Set(Utc::now().naive_utc());

        Ok(course.update(db).await?)
    }

    /// Deletes a course. Enrolled students are unlinked by the foreign key.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        if !Self::exists_by_id(db, id).await? {
            return Err(ServiceError::NotFound("Course"));
        }

        courses::Entity::delete_by_id(id).exec(db).await?;

        info!("Deleted course {id}");
        Ok(())
    }

    /// Flips the active flag and nothing else
    pub async fn set_active(
        db: &DatabaseConnection,
        id: i32,
        active: bool,
    ) -> Result<courses::Model, ServiceError> {
        let course = Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound("Course"))?;

        let mut course: courses::ActiveModel = course.into();
        course.active = Set(active);
        course.updated_at = Set(Utc::now().naive_utc());
        let course = course.update(db).await?;

        info!("Course {id} is now {}", if active { "active" } else { "inactive" });
        Ok(course)
    }
}
