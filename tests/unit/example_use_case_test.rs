// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use example_api::application::dto::example_request::CreateExampleDto;
use example_api::application::use_cases::example_use_case::ExampleUseCase;
use example_api::domain::repositories::example_repository::ExampleRepository;
use example_api::infrastructure::repositories::in_memory_example_repo::InMemoryExampleRepository;
use std::sync::Arc;

fn setup() -> (
    ExampleUseCase<InMemoryExampleRepository>,
    Arc<InMemoryExampleRepository>,
) {
    let repo = Arc::new(InMemoryExampleRepository::new());
    (ExampleUseCase::new(repo.clone()), repo)
}

#[tokio::test]
async fn test_create_multiple_examples() {
    let (use_case, repo) = setup();

    let first = use_case
        .create_example(CreateExampleDto::new("Example 1", None))
        .await
        .unwrap();
    let second = use_case
        .create_example(CreateExampleDto::new("Example 2", None))
        .await
        .unwrap();

    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_ids_are_unique_and_increasing() {
    let (use_case, _) = setup();

    let mut ids = Vec::new();
    for i in 0..20 {
        let created = use_case
            .create_example(CreateExampleDto::new(format!("Example {}", i), None))
            .await
            .unwrap();
        ids.push(created.id());
    }

    let expected: Vec<i32> = (1..=20).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_get_example_success_and_idempotent() {
    let (use_case, _) = setup();
    let created = use_case
        .create_example(CreateExampleDto::new("Test", None))
        .await
        .unwrap();

    let first = use_case.get_example(created.id()).await.unwrap();
    let second = use_case.get_example(created.id()).await.unwrap();

    assert_eq!(first, Some(created));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_examples_empty() {
    let (use_case, _) = setup();

    assert!(use_case.list_examples().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_examples_in_creation_order() {
    let (use_case, _) = setup();
    for name in ["Example 1", "Example 2", "Example 3"] {
        use_case
            .create_example(CreateExampleDto::new(name, None))
            .await
            .unwrap();
    }

    let result = use_case.list_examples().await.unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].name(), "Example 1");
    assert_eq!(result[1].name(), "Example 2");
    assert_eq!(result[2].name(), "Example 3");
}

#[tokio::test]
async fn test_create_example_without_description() {
    let (use_case, _) = setup();

    let result = use_case
        .create_example(CreateExampleDto::new("Test Example", None))
        .await
        .unwrap();

    assert_eq!(result.name(), "Test Example");
    assert_eq!(result.description(), None);
}
