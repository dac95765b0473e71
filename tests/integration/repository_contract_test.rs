// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::setup_db;
use example_api::domain::models::example::Example;
use example_api::domain::repositories::example_repository::{ExampleRepository, RepositoryError};
use example_api::infrastructure::repositories::example_repo_impl::ExampleRepositoryImpl;
use example_api::infrastructure::repositories::in_memory_example_repo::InMemoryExampleRepository;

/// 两种仓库实现共享的行为约定
async fn assert_repository_contract<R: ExampleRepository>(repo: &R) {
    // Given: 空仓库
    assert!(repo.find_all().await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);

    // When: 依次保存新实体
    let created = Example::new("Test Example", Some("Test Description".to_string())).unwrap();
    let first = repo.save(&created).await.unwrap();
    let second = repo
        .save(&Example::new("Second", None).unwrap())
        .await
        .unwrap();

    // Then: ID 从 1 开始递增，其余字段与创建时一致
    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert_eq!(first, created.clone().with_id(1));

    let found = repo.find_by_id(1).await.unwrap();
    assert_eq!(found, Some(first.clone()));
    assert_eq!(repo.find_by_id(1).await.unwrap(), found);
    assert!(repo.find_by_id(999).await.unwrap().is_none());

    let ids: Vec<i32> = repo.find_all().await.unwrap().iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec![1, 2]);

    // 更新已有记录
    let mut renamed = first.clone();
    renamed.rename("Renamed").unwrap();
    assert_eq!(repo.save(&renamed).await.unwrap(), renamed);
    assert_eq!(repo.find_by_id(1).await.unwrap(), Some(renamed));
    assert_eq!(repo.count().await.unwrap(), 2);

    // 更新不存在的记录被拒绝
    let ghost = Example::new("ghost", None).unwrap().with_id(99);
    assert!(matches!(
        repo.save(&ghost).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn test_in_memory_repository_contract() {
    assert_repository_contract(&InMemoryExampleRepository::new()).await;
}

#[tokio::test]
async fn test_database_repository_contract() {
    let db = setup_db().await;
    assert_repository_contract(&ExampleRepositoryImpl::new(db)).await;
}
