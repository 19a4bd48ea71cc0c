//! Tests for the mock global configuration repository

use crate::domain::entities::global_config::{TwoFactorAuthGlobalConfig, GLOBAL_CONFIG_ID};
use crate::repositories::global_config::{GlobalConfigRepository, MockGlobalConfigRepository};

#[tokio::test]
async fn test_upsert_replaces_singleton() {
    let repo = MockGlobalConfigRepository::new();
    assert!(repo.find(GLOBAL_CONFIG_ID).await.unwrap().is_none());

    let mut config = TwoFactorAuthGlobalConfig::default();
    repo.upsert(config.clone()).await.unwrap();
    config.exclude_route("plg_customer_2fa_sms_send_onetime");
    repo.upsert(config).await.unwrap();

    assert_eq!(repo.row_count().await, 1);
    let stored = repo.find(GLOBAL_CONFIG_ID).await.unwrap().unwrap();
    assert_eq!(stored.exclude_routes, vec!["plg_customer_2fa_sms_send_onetime"]);
}

#[tokio::test]
async fn test_with_config_seeds_repository() {
    let mut seeded = TwoFactorAuthGlobalConfig::default();
    seeded.exclude_route("mypage_login");

    let repo = MockGlobalConfigRepository::with_config(seeded.clone());
    assert_eq!(repo.find(GLOBAL_CONFIG_ID).await.unwrap(), Some(seeded));
}
