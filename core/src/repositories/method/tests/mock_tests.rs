//! Tests for the mock method repository implementation

use crate::domain::entities::method::TwoFactorAuthMethod;
use crate::repositories::method::{MethodRepository, MockMethodRepository};

#[tokio::test]
async fn test_upsert_assigns_id_once() {
    let repo = MockMethodRepository::new();

    let created = repo.upsert(TwoFactorAuthMethod::new("SMS", "route_a")).await.unwrap();
    assert_eq!(created.id, Some(1));

    let mut changed = created.clone();
    changed.disable();
    let updated = repo.upsert(changed).await.unwrap();

    assert_eq!(updated.id, Some(1));
    assert_eq!(repo.count().await.unwrap(), 1);
    assert!(repo.find_by_name("SMS").await.unwrap().unwrap().is_disabled);
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let repo = MockMethodRepository::new();
    assert!(repo.find_by_name("SMS").await.unwrap().is_none());
}

#[tokio::test]
async fn test_forced_failure() {
    let repo = MockMethodRepository::new();
    repo.set_should_fail(true);

    assert!(repo.find_by_name("SMS").await.is_err());
    assert!(repo.upsert(TwoFactorAuthMethod::new("SMS", "r")).await.is_err());

    repo.set_should_fail(false);
    assert!(repo.get_all().await.is_empty());
}
