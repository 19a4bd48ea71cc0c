//! Tests for the PluginManager entry points over in-memory collaborators.

use std::path::Path;
use std::sync::Arc;

use tfa_core::repositories::*;
use tfa_core::services::{AssetStore, LifecycleState, MockAssetStore};
use tfa_shared::PluginConfig;

use crate::context::PluginContext;
use crate::manager::PluginManager;
use crate::meta::PluginMeta;

struct Fixture {
    ctx: PluginContext,
    methods: Arc<MockMethodRepository>,
    pages: Arc<MockPageRepository>,
    assets: Arc<MockAssetStore>,
}

async fn fixture() -> Fixture {
    let methods = Arc::new(MockMethodRepository::new());
    let pages = Arc::new(MockPageRepository::new());
    let assets = Arc::new(MockAssetStore::new());
    assets
        .add_file("/plugin/Resource/template/default/tfa/sms/send.twig", "send")
        .await;
    assets
        .add_file("/plugin/Resource/template/default/tfa/sms/input.twig", "input")
        .await;

    let ctx = PluginContext::new(
        methods.clone(),
        Arc::new(MockGlobalConfigRepository::new()),
        pages.clone(),
        Arc::new(MockPageLayoutRepository::new()),
        assets.clone(),
        PluginConfig::new("/theme", "/plugin/Resource/template/default"),
    );

    Fixture { ctx, methods, pages, assets }
}

#[tokio::test]
async fn test_enable_on_fresh_system() {
    let f = fixture().await;
    let mut manager = PluginManager::default();

    manager.enable(&PluginMeta::current(), &f.ctx).await.unwrap();

    assert_eq!(manager.state(), LifecycleState::Enabled);
    assert!(f.methods.find_by_name("SMS").await.unwrap().unwrap().is_enabled());
    assert!(f
        .pages
        .find_by_url("plg_customer_2fa_sms_send_onetime")
        .await
        .unwrap()
        .is_some());
    assert!(f
        .pages
        .find_by_url("plg_customer_2fa_sms_input_onetime")
        .await
        .unwrap()
        .is_some());
    assert_eq!(
        f.assets
            .read_file(Path::new(
                "/theme/TwoFactorAuthCustomerSms42/Resource/template/default/tfa/sms/input.twig"
            ))
            .await,
        Some(b"input".to_vec())
    );
}

#[tokio::test]
async fn test_disable_after_enable() {
    let f = fixture().await;
    let meta = PluginMeta::current();
    let mut manager = PluginManager::default();

    manager.enable(&meta, &f.ctx).await.unwrap();
    manager.disable(&meta, &f.ctx).await.unwrap();

    assert_eq!(manager.state(), LifecycleState::Disabled);
    assert!(f.methods.find_by_name("SMS").await.unwrap().unwrap().is_disabled);
    assert!(f.pages.get_all().await.is_empty());
    assert!(!f
        .assets
        .exists(Path::new("/theme/TwoFactorAuthCustomerSms42"))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_uninstall_without_prior_enable() {
    let f = fixture().await;
    let mut manager = PluginManager::new(LifecycleState::Disabled);

    manager.uninstall(&PluginMeta::current(), &f.ctx).await.unwrap();

    assert_eq!(manager.state(), LifecycleState::Uninstalled);
    assert_eq!(f.methods.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_failure_reports_operation_and_keeps_state() {
    let f = fixture().await;
    let meta = PluginMeta::current();
    let mut manager = PluginManager::default();
    f.pages.set_should_fail(true);

    let err = manager.enable(&meta, &f.ctx).await.unwrap_err();

    assert!(err.to_string().contains("Failed to enable plugin TwoFactorAuthCustomerSms42"));
    assert!(err.root_cause().to_string().contains("Storage error"));
    assert_eq!(manager.state(), LifecycleState::Uninstalled);

    // Steps before the failure stay applied
    assert!(f.methods.find_by_name("SMS").await.unwrap().is_some());
}
