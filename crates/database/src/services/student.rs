use crate::{
    entities::{courses, students},
    error::ServiceError,
    services::course::CourseService,
};
use chrono::Utc;
use log::info;
use models::student::StudentFields;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// A student together with the course it is enrolled in, if any
pub type StudentWithCourse = (students::Model, Option<courses::Model>);

const DUPLICATE_STUDENT: &str = "A student with this CPF or email is already registered";

pub struct StudentService;

impl StudentService {
    /// Registers a student without a course.
    ///
    /// Fails with a conflict, without writing anything, if the CPF or email is taken.
    pub async fn create(
        db: &DatabaseConnection,
        fields: StudentFields,
    ) -> Result<StudentWithCourse, ServiceError> {
        fields.validate()?;
        Self::ensure_unique(db, &fields, None).await?;

        let now = Utc::now().naive_utc();
        let student = students::ActiveModel {
            first_name: Set(fields.first_name),
            last_name: Set(fields.last_name),
            email: Set(fields.email),
            age: Set(fields.age),
            cpf: Set(fields.cpf),
            course_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|err| ServiceError::from_write(err, DUPLICATE_STUDENT))?;

        info!("Registered student {}", student.id);
        Ok((student, None))
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<StudentWithCourse>, DbErr> {
        students::Entity::find()
            .find_also_related(courses::Entity)
            .order_by_asc(students::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<StudentWithCourse>, DbErr> {
        students::Entity::find_by_id(id)
            .find_also_related(courses::Entity)
            .one(db)
            .await
    }

    pub async fn find_by_cpf(
        db: &DatabaseConnection,
        cpf: &str,
    ) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find()
            .filter(students::Column::Cpf.eq(cpf))
            .one(db)
            .await
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<students::Model>, DbErr> {
        students::Entity::find()
            .filter(students::Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Overwrites the personal fields of a student, leaving the course untouched
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        fields: StudentFields,
    ) -> Result<StudentWithCourse, ServiceError> {
        let student = students::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;
        fields.validate()?;
        Self::ensure_unique(db, &fields, Some(id)).await?;

        let mut student: students::ActiveModel = student.into();
        student.first_name = Set(fields.first_name);
        student.last_name = Set(fields.last_name);
        student.email = Set(fields.email);
        student.age = Set(fields.age);
        student.cpf = Set(fields.cpf);
        student.updated_at = Set(Utc::now().naive_utc());
        student
            .update(db)
            .await
            .map_err(|err| ServiceError::from_write(err, DUPLICATE_STUDENT))?;

        Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound("Student"))
    }

    /// Enrolls a student in a course, or unenrolls it when `course_id` is `None`
    pub async fn assign_course(
        db: &DatabaseConnection,
        id: i32,
        course_id: Option<i32>,
    ) -> Result<StudentWithCourse, ServiceError> {
        let student = students::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        if let Some(course_id) = course_id
            && !CourseService::exists_by_id(db, course_id).await?
        {
            return Err(ServiceError::NotFound("Course"));
        }

        let mut student: students::ActiveModel = student.into();
        student.course_id = Set(course_id);
        student.updated_at = Set(Utc::now().naive_utc());
        student.update(db).await?;

        Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound("Student"))
    }

    /// Deletes a student unless it is enrolled in an active course
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        let (student, course) = Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound("Student"))?;

        Self::ensure_deletable(course.as_ref())?;

        students::Entity::delete_by_id(student.id).exec(db).await?;

        info!("Deleted student {id}");
        Ok(())
    }

    /// The one place deciding whether a student may be deleted: not while
    /// its course exists and is active.
    pub fn ensure_deletable(course: Option<&courses::Model>) -> Result<(), ServiceError> {
        match course {
            Some(course) if course.active => Err(ServiceError::ActiveCourse),
            _ => Ok(()),
        }
    }

    /// Checks CPF and email against every student other than `current_id`
    async fn ensure_unique(
        db: &DatabaseConnection,
        fields: &StudentFields,
        current_id: Option<i32>,
    ) -> Result<(), ServiceError> {
        if let Some(existing) = Self::find_by_cpf(db, &fields.cpf).await?
            && Some(existing.id) != current_id
        {
            return Err(ServiceError::Conflict("CPF already registered".to_string()));
        }

        if let Some(existing) = Self::find_by_email(db, &fields.email).await?
            && Some(existing.id) != current_id
        {
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        Ok(())
    }
}
