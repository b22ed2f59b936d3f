//! Course manager scenario tests against the in-memory store.

use std::sync::Arc;

use uuid::Uuid;

use common::AppError;
use course_service_lib::repository::{
    demo_courses, CourseRepository, InMemoryCourseStore, DEMO_COURSE_UUID,
};
use course_service_lib::service::{CourseManager, CourseService};
use domain::{
    Course, CourseConstraint, CourseMeta, Student, Tutor, User, MAX_COURSES_PER_STUDENT,
    MAX_COURSES_PER_TUTOR, MAX_STUDENTS_PER_COURSE,
};

fn setup() -> (Arc<InMemoryCourseStore>, CourseManager) {
    let store = Arc::new(InMemoryCourseStore::new());
    let service = CourseManager::new(store.clone());
    (store, service)
}

fn tutor(uuid: Uuid) -> Tutor {
    Tutor::new(User::new(uuid, "John", "Stone"), "Computer Science", "Golang")
}

fn student(uuid: Uuid) -> Student {
    Student::new(User::new(uuid, "Alice", "Smith"), "Computer Science")
}

async fn create_course(service: &CourseManager, name: &str) -> Course {
    service
        .create(CourseMeta::new(name, tutor(Uuid::new_v4())))
        .await
        .expect("course should be created")
}

#[tokio::test]
async fn test_create_assigns_uuid_and_starts_empty() {
    let (store, service) = setup();

    let created = service
        .create(CourseMeta::new("Microservices with Go", tutor(Uuid::new_v4())))
        .await
        .unwrap();

    assert!(!created.uuid.is_nil());
    assert!(created.students.is_empty());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_keeps_caller_uuid() {
    let (_store, service) = setup();
    let wanted = Uuid::new_v4();

    let mut meta = CourseMeta::new("Systems", tutor(Uuid::new_v4()));
    meta.uuid = Some(wanted);
    let created = service.create(meta).await.unwrap();

    assert_eq!(created.uuid, wanted);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (_store, service) = setup();

    let created = create_course(&service, "Systems").await;
    let fetched = service.get(created.uuid).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_third_course_for_tutor_is_rejected() {
    let (store, service) = setup();
    let tutor_uuid = Uuid::new_v4();

    for i in 0..MAX_COURSES_PER_TUTOR {
        service
            .create(CourseMeta::new(format!("Course {}", i), tutor(tutor_uuid)))
            .await
            .unwrap();
    }
    let err = service
        .create(CourseMeta::new("One too many", tutor(tutor_uuid)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Constraint(CourseConstraint::TutorMaxCourses)
    ));
    assert_eq!(
        err.to_string(),
        "validation failed: a tutor can facilitate maximum 2 courses"
    );
    assert_eq!(store.by_tutor(tutor_uuid).await.unwrap().len(), MAX_COURSES_PER_TUTOR);
    assert_eq!(store.len().await, MAX_COURSES_PER_TUTOR);
}

#[tokio::test]
async fn test_course_rejects_twenty_first_student() {
    let (_store, service) = setup();
    let course = create_course(&service, "Popular").await;

    for _ in 0..MAX_STUDENTS_PER_COURSE {
        service
            .register_student(course.uuid, student(Uuid::new_v4()))
            .await
            .unwrap();
    }
    let err = service
        .register_student(course.uuid, student(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Constraint(CourseConstraint::CourseMaxStudents)
    ));
    let stored = service.get(course.uuid).await.unwrap();
    assert_eq!(stored.student_count(), MAX_STUDENTS_PER_COURSE);
}

#[tokio::test]
async fn test_student_rejected_from_fifth_course() {
    let (store, service) = setup();
    let student_uuid = Uuid::new_v4();

    for i in 0..MAX_COURSES_PER_STUDENT {
        let course = create_course(&service, &format!("Course {}", i)).await;
        service
            .register_student(course.uuid, student(student_uuid))
            .await
            .unwrap();
    }
    let fifth = create_course(&service, "Course 5").await;
    let err = service
        .register_student(fifth.uuid, student(student_uuid))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Constraint(CourseConstraint::StudentMaxCourses)
    ));
    assert_eq!(
        store.by_student(student_uuid).await.unwrap().len(),
        MAX_COURSES_PER_STUDENT
    );
    assert!(!service.get(fifth.uuid).await.unwrap().has_student(&student_uuid));
}

#[tokio::test]
async fn test_register_is_idempotent() {
    let (_store, service) = setup();
    let course = create_course(&service, "Systems").await;
    let alice = student(Uuid::new_v4());

    service.register_student(course.uuid, alice.clone()).await.unwrap();
    let once = service.get(course.uuid).await.unwrap();
    service.register_student(course.uuid, alice.clone()).await.unwrap();
    let twice = service.get(course.uuid).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.student_count(), 1);
}

#[tokio::test]
async fn test_reregister_allowed_in_full_course() {
    let (_store, service) = setup();
    let course = create_course(&service, "Full").await;
    let first = student(Uuid::new_v4());

    service.register_student(course.uuid, first.clone()).await.unwrap();
    for _ in 1..MAX_STUDENTS_PER_COURSE {
        service
            .register_student(course.uuid, student(Uuid::new_v4()))
            .await
            .unwrap();
    }

    assert!(service.register_student(course.uuid, first).await.is_ok());
}

#[tokio::test]
async fn test_unregister_unknown_student_is_noop() {
    let (_store, service) = setup();
    let course = create_course(&service, "Systems").await;

    service
        .unregister_student(course.uuid, Uuid::new_v4())
        .await
        .unwrap();

    assert_eq!(service.get(course.uuid).await.unwrap(), course);
}

#[tokio::test]
async fn test_register_then_unregister_leaves_no_trace() {
    let (store, service) = setup();
    let course = create_course(&service, "Systems").await;
    let student_uuid = Uuid::new_v4();

    service
        .register_student(course.uuid, student(student_uuid))
        .await
        .unwrap();
    service
        .unregister_student(course.uuid, student_uuid)
        .await
        .unwrap();
    service
        .unregister_student(course.uuid, student_uuid)
        .await
        .unwrap();

    assert!(store.by_student(student_uuid).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unregistering_frees_a_student_slot() {
    let (_store, service) = setup();
    let student_uuid = Uuid::new_v4();
    let mut courses = Vec::new();

    for i in 0..MAX_COURSES_PER_STUDENT {
        let course = create_course(&service, &format!("Course {}", i)).await;
        service
            .register_student(course.uuid, student(student_uuid))
            .await
            .unwrap();
        courses.push(course);
    }
    service
        .unregister_student(courses[0].uuid, student_uuid)
        .await
        .unwrap();

    let extra = create_course(&service, "Extra").await;
    assert!(service
        .register_student(extra.uuid, student(student_uuid))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_store, service) = setup();
    let course = create_course(&service, "Systems").await;

    service.delete(course.uuid).await.unwrap();
    service.delete(course.uuid).await.unwrap();
    service.delete(Uuid::new_v4()).await.unwrap();

    assert!(matches!(
        service.get(course.uuid).await.unwrap_err(),
        AppError::CourseNotFound(_)
    ));
}

#[tokio::test]
async fn test_delete_frees_a_tutor_slot() {
    let (_store, service) = setup();
    let tutor_uuid = Uuid::new_v4();

    let first = service
        .create(CourseMeta::new("First", tutor(tutor_uuid)))
        .await
        .unwrap();
    service
        .create(CourseMeta::new("Second", tutor(tutor_uuid)))
        .await
        .unwrap();
    service.delete(first.uuid).await.unwrap();

    assert!(service
        .create(CourseMeta::new("Third", tutor(tutor_uuid)))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_returns_every_course() {
    let (_store, service) = setup();

    create_course(&service, "A").await;
    create_course(&service, "B").await;

    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unregister_on_missing_course_is_not_found() {
    let (_store, service) = setup();

    let err = service
        .unregister_student(Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::CourseNotFound(_)));
}

#[tokio::test]
async fn test_seeded_store_serves_demo_course() {
    let store = Arc::new(InMemoryCourseStore::with_courses(demo_courses()));
    let service = CourseManager::new(store);

    let course = service.get(DEMO_COURSE_UUID).await.unwrap();

    assert_eq!(course.name, "Mock Course");
    assert_eq!(course.student_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_respect_tutor_cap() {
    let store = Arc::new(InMemoryCourseStore::new());
    let service = Arc::new(CourseManager::new(store.clone()));
    let tutor_uuid = Uuid::new_v4();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create(CourseMeta::new(format!("Course {}", i), tutor(tutor_uuid)))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, MAX_COURSES_PER_TUTOR);
    assert_eq!(store.by_tutor(tutor_uuid).await.unwrap().len(), MAX_COURSES_PER_TUTOR);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_respect_course_cap() {
    let store = Arc::new(InMemoryCourseStore::new());
    let service = Arc::new(CourseManager::new(store.clone()));
    let course = service
        .create(CourseMeta::new("Crowded", tutor(Uuid::new_v4())))
        .await
        .unwrap();
    let course_uuid = course.uuid;

    let handles: Vec<_> = (0..40)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .register_student(course_uuid, student(Uuid::new_v4()))
                    .await
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.await.unwrap();
    }

    let stored = store.by_id(course_uuid).await.unwrap().unwrap();
    assert_eq!(stored.student_count(), MAX_STUDENTS_PER_COURSE);
}
