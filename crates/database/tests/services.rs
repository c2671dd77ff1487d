use database::{
    entities::students,
    error::ServiceError,
    services::{course::CourseService, student::StudentService},
};
use migration::{Migrator, MigratorTrait};
use models::{course::CourseFields, student::StudentFields};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};

async fn setup() -> DatabaseConnection {
    // A single connection, otherwise every pooled connection gets its own in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

fn go_basics() -> CourseFields {
    CourseFields {
        title: "Go Basics".to_string(),
        description: "Intro".to_string(),
        workload_hours: 40,
        exercise_count: 10,
    }
}

fn ana() -> StudentFields {
    StudentFields {
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: "ana@x.com".to_string(),
        age: 20,
        cpf: "12345678901".to_string(),
    }
}

async fn student_count(db: &DatabaseConnection) -> u64 {
    students::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn created_course_is_active() {
    let db = setup().await;

    let course = CourseService::create(&db, go_basics()).await.unwrap();

    assert_eq!(course.id, 1);
    assert!(course.active);
    assert_eq!(course.title, "Go Basics");
}

#[tokio::test]
async fn invalid_course_is_not_persisted() {
    let db = setup().await;

    let result = CourseService::create(
        &db,
        CourseFields {
            title: String::new(),
            ..go_basics()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert!(CourseService::find_active(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn inactive_courses_are_hidden_from_listing_but_not_lookup() {
    let db = setup().await;
    let kept = CourseService::create(&db, go_basics()).await.unwrap();
    let hidden = CourseService::create(
        &db,
        CourseFields {
            title: "Rust Basics".to_string(),
            ..go_basics()
        },
    )
    .await
    .unwrap();

    CourseService::set_active(&db, hidden.id, false)
        .await
        .unwrap();

    let listed = CourseService::find_active(&db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);

    let found = CourseService::find_by_id(&db, hidden.id)
        .await
        .unwrap()
        .expect("inactive course should still be found by id");
    assert!(!found.active);
}

#[tokio::test]
async fn set_active_changes_only_the_flag() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();

    let toggled = CourseService::set_active(&db, course.id, false)
        .await
        .unwrap();

    assert!(!toggled.active);
    assert_eq!(toggled.id, course.id);
    assert_eq!(toggled.title, course.title);
    assert_eq!(toggled.description, course.description);
    assert_eq!(toggled.workload_hours, course.workload_hours);
    assert_eq!(toggled.exercise_count, course.exercise_count);
}

#[tokio::test]
async fn set_active_on_missing_course_is_not_found() {
    let db = setup().await;

    let result = CourseService::set_active(&db, 42, true).await;

    assert!(matches!(result, Err(ServiceError::NotFound("Course"))));
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_active_flag() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    CourseService::set_active(&db, course.id, false)
        .await
        .unwrap();

    let updated = CourseService::update(
        &db,
        course.id,
        CourseFields {
            title: "Go Advanced".to_string(),
            description: "Concurrency".to_string(),
            workload_hours: 60,
            exercise_count: 25,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, course.id);
    assert_eq!(updated.title, "Go Advanced");
    assert_eq!(updated.workload_hours, 60);
    assert!(!updated.active);
}

#[tokio::test]
async fn update_missing_course_is_not_found() {
    let db = setup().await;

    let result = CourseService::update(&db, 7, go_basics()).await;

    assert!(matches!(result, Err(ServiceError::NotFound("Course"))));
}

#[tokio::test]
async fn delete_course_removes_it() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();

    CourseService::delete(&db, course.id).await.unwrap();

    assert!(!CourseService::exists_by_id(&db, course.id).await.unwrap());
    assert!(CourseService::find_active(&db).await.unwrap().is_empty());
    assert!(matches!(
        CourseService::delete(&db, course.id).await,
        Err(ServiceError::NotFound("Course"))
    ));
}

#[tokio::test]
async fn delete_course_unlinks_enrolled_students() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();
    StudentService::assign_course(&db, student.id, Some(course.id))
        .await
        .unwrap();

    CourseService::delete(&db, course.id).await.unwrap();

    let (student, course) = StudentService::find_by_id(&db, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(student.course_id, None);
    assert!(course.is_none());
}

#[tokio::test]
async fn created_student_has_no_course() {
    let db = setup().await;

    let (student, course) = StudentService::create(&db, ana()).await.unwrap();

    assert_eq!(student.id, 1);
    assert_eq!(student.course_id, None);
    assert!(course.is_none());
}

#[tokio::test]
async fn duplicate_cpf_is_a_conflict_and_writes_nothing() {
    let db = setup().await;
    StudentService::create(&db, ana()).await.unwrap();

    let result = StudentService::create(
        &db,
        StudentFields {
            email: "other@x.com".to_string(),
            ..ana()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert_eq!(student_count(&db).await, 1);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let db = setup().await;
    StudentService::create(&db, ana()).await.unwrap();

    let result = StudentService::create(
        &db,
        StudentFields {
            cpf: "98765432100".to_string(),
            ..ana()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert_eq!(student_count(&db).await, 1);
}

#[tokio::test]
async fn update_student_keeps_course_and_returns_fresh_record() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();
    StudentService::assign_course(&db, student.id, Some(course.id))
        .await
        .unwrap();

    let (updated, updated_course) = StudentService::update(
        &db,
        student.id,
        StudentFields {
            last_name: "Souza".to_string(),
            age: 21,
            ..ana()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.last_name, "Souza");
    assert_eq!(updated.age, 21);
    assert_eq!(updated.cpf, "12345678901");
    assert_eq!(updated_course.map(|c| c.id), Some(course.id));
}

#[tokio::test]
async fn update_student_to_taken_cpf_is_a_conflict() {
    let db = setup().await;
    StudentService::create(&db, ana()).await.unwrap();
    let (bruno, _) = StudentService::create(
        &db,
        StudentFields {
            first_name: "Bruno".to_string(),
            email: "bruno@x.com".to_string(),
            cpf: "98765432100".to_string(),
            ..ana()
        },
    )
    .await
    .unwrap();

    let result = StudentService::update(
        &db,
        bruno.id,
        StudentFields {
            email: "bruno@x.com".to_string(),
            ..ana()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    let (bruno, _) = StudentService::find_by_id(&db, bruno.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bruno.cpf, "98765432100");
}

#[tokio::test]
async fn update_missing_student_is_not_found_and_changes_nothing() {
    let db = setup().await;
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();

    let result = StudentService::update(
        &db,
        99,
        StudentFields {
            first_name: "Carla".to_string(),
            email: "carla@x.com".to_string(),
            cpf: "11122233344".to_string(),
            ..ana()
        },
    )
    .await;

    assert!(matches!(result, Err(ServiceError::NotFound("Student"))));
    assert_eq!(student_count(&db).await, 1);
    let (unchanged, _) = StudentService::find_by_id(&db, student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, student);
}

#[tokio::test]
async fn assign_course_rejects_unknown_course() {
    let db = setup().await;
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();

    let result = StudentService::assign_course(&db, student.id, Some(5)).await;

    assert!(matches!(result, Err(ServiceError::NotFound("Course"))));
}

#[tokio::test]
async fn student_in_active_course_cannot_be_deleted_until_course_is_inactive() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();
    StudentService::assign_course(&db, student.id, Some(course.id))
        .await
        .unwrap();

    let blocked = StudentService::delete(&db, student.id).await;
    assert!(matches!(blocked, Err(ServiceError::ActiveCourse)));
    assert_eq!(student_count(&db).await, 1);

    CourseService::set_active(&db, course.id, false)
        .await
        .unwrap();
    StudentService::delete(&db, student.id).await.unwrap();

    assert_eq!(student_count(&db).await, 0);
}

#[tokio::test]
async fn student_without_course_is_always_deletable() {
    let db = setup().await;
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();

    StudentService::delete(&db, student.id).await.unwrap();

    assert!(
        StudentService::find_by_id(&db, student.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(matches!(
        StudentService::delete(&db, student.id).await,
        Err(ServiceError::NotFound("Student"))
    ));
}

#[tokio::test]
async fn find_all_includes_nested_courses() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    let (ana_model, _) = StudentService::create(&db, ana()).await.unwrap();
    StudentService::create(
        &db,
        StudentFields {
            first_name: "Bruno".to_string(),
            email: "bruno@x.com".to_string(),
            cpf: "98765432100".to_string(),
            ..ana()
        },
    )
    .await
    .unwrap();
    StudentService::assign_course(&db, ana_model.id, Some(course.id))
        .await
        .unwrap();

    let all = StudentService::find_all(&db).await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].1.as_ref().map(|c| c.id), Some(course.id));
    assert!(all[1].1.is_none());
}

#[tokio::test]
async fn clearing_course_unlinks_student_and_allows_deletion() {
    let db = setup().await;
    let course = CourseService::create(&db, go_basics()).await.unwrap();
    let (student, _) = StudentService::create(&db, ana()).await.unwrap();
    StudentService::assign_course(&db, student.id, Some(course.id))
        .await
        .unwrap();

    let (cleared, cleared_course) = StudentService::assign_course(&db, student.id, None)
        .await
        .unwrap();

    assert_eq!(cleared.course_id, None);
    assert!(cleared_course.is_none());

    // The course is still active, but the student no longer belongs to it
    assert!(
        CourseService::find_by_id(&db, course.id)
            .await
            .unwrap()
            .unwrap()
            .active
    );
    StudentService::delete(&db, student.id).await.unwrap();
    assert_eq!(student_count(&db).await, 0);
}
