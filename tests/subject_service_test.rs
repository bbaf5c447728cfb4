//! Subject service unit tests.

use std::sync::Arc;

use aula::domain::Subject;
use aula::errors::AppError;
use aula::infra::MockSubjectRepository;
use aula::services::{SubjectCatalog, SubjectService};

fn catalog() -> Vec<Subject> {
    vec![
        Subject {
            code: 1,
            name: "Mathematics".to_string(),
        },
        Subject {
            code: 2,
            name: "Chemistry".to_string(),
        },
    ]
}

#[tokio::test]
async fn test_create_subject_success() {
    let mut repo = MockSubjectRepository::new();
    repo.expect_create().returning(|name| {
        Ok(Subject { code: 1, name })
    });

    let service = SubjectCatalog::new(Arc::new(repo));
    let subject = service
        .create_subject("Mathematics".to_string())
        .await
        .unwrap();

    assert_eq!(subject.code, 1);
    assert_eq!(subject.name, "Mathematics");
}

#[tokio::test]
async fn test_create_duplicate_subject_is_conflict() {
    // The unique index on LOWER(nombre) rejects "mathematics" when
    // "Mathematics" exists; the repository reports it as Conflict
    let mut repo = MockSubjectRepository::new();
    repo.expect_create()
        .returning(|_| Err(AppError::conflict("Subject")));

    let service = SubjectCatalog::new(Arc::new(repo));
    let result = service.create_subject("mathematics".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_search_without_term_returns_full_catalog() {
    let mut repo = MockSubjectRepository::new();
    repo.expect_search()
        .withf(|term| term.is_none())
        .returning(|_| Ok(catalog()));

    let service = SubjectCatalog::new(Arc::new(repo));
    let subjects = service.search_subjects(None).await.unwrap();

    assert_eq!(subjects.len(), 2);
    // Catalog order follows the storage-assigned code
    assert!(subjects[0].code < subjects[1].code);
}

#[tokio::test]
async fn test_search_forwards_term() {
    let mut repo = MockSubjectRepository::new();
    repo.expect_search()
        .withf(|term| term.as_deref() == Some("math"))
        .returning(|_| {
            Ok(vec![Subject {
                code: 1,
                name: "Mathematics".to_string(),
            }])
        });

    let service = SubjectCatalog::new(Arc::new(repo));
    let subjects = service
        .search_subjects(Some("math".to_string()))
        .await
        .unwrap();

    assert_eq!(subjects.len(), 1);
    assert_eq!(subjects[0].name, "Mathematics");
}

#[tokio::test]
async fn test_search_with_no_matches_is_empty_not_error() {
    let mut repo = MockSubjectRepository::new();
    repo.expect_search().returning(|_| Ok(vec![]));

    let service = SubjectCatalog::new(Arc::new(repo));
    let subjects = service
        .search_subjects(Some("zzz".to_string()))
        .await
        .unwrap();

    assert!(subjects.is_empty());
}
