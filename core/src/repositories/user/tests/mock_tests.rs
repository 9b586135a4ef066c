//! Unit tests for mock user repository

use crate::errors::StorageError;
use crate::repositories::user::{MockUserRepository, UserRepository};

#[tokio::test]
async fn test_mock_repository_save_and_find() {
    let repo = MockUserRepository::new();

    let id = repo.save_user("a@x.com", "hash-a").await.unwrap();
    assert_eq!(id, 1);

    let user = repo.user("a@x.com").await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.pass_hash, "hash-a");
}

#[tokio::test]
async fn test_mock_repository_assigns_sequential_ids() {
    let repo = MockUserRepository::new();

    assert_eq!(repo.save_user("a@x.com", "h").await.unwrap(), 1);
    assert_eq!(repo.save_user("b@x.com", "h").await.unwrap(), 2);
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();

    repo.save_user("a@x.com", "first").await.unwrap();
    let result = repo.save_user("a@x.com", "second").await;

    assert!(matches!(result, Err(StorageError::UserExists)));
    assert_eq!(repo.count().await, 1);
    assert_eq!(repo.user("a@x.com").await.unwrap().pass_hash, "first");
}

#[tokio::test]
async fn test_mock_repository_unknown_email() {
    let repo = MockUserRepository::new();
    let result = repo.user("nobody@x.com").await;
    assert!(matches!(result, Err(StorageError::UserNotFound)));
}

#[tokio::test]
async fn test_mock_repository_admin_flag() {
    let repo = MockUserRepository::new();
    let id = repo.save_user("a@x.com", "h").await.unwrap();

    assert!(!repo.is_admin(id).await.unwrap());
    assert!(repo.set_admin(id, true).await);
    assert!(repo.is_admin(id).await.unwrap());
    assert!(repo.set_admin(id, false).await);
    assert!(!repo.is_admin(id).await.unwrap());

    assert!(!repo.set_admin(99, true).await);
    assert!(matches!(repo.is_admin(99).await, Err(StorageError::UserNotFound)));
}
