//! Integration tests driving whole lifecycles through the public API
//! with the in-memory repositories and asset store.

use std::sync::Arc;

use tfa_core::domain::entities::global_config::TwoFactorAuthGlobalConfig;
use tfa_core::domain::entities::method::TwoFactorAuthMethod;
use tfa_core::repositories::*;
use tfa_core::services::{
    AssetStore, LifecycleConfig, LifecycleController, LifecycleState, MethodRegistry,
    MockAssetStore, PageRegistrar, TemplateAssetInstaller,
};
use tfa_shared::PluginConfig;

struct System {
    methods: Arc<MockMethodRepository>,
    global_config: Arc<MockGlobalConfigRepository>,
    pages: Arc<MockPageRepository>,
    page_layouts: Arc<MockPageLayoutRepository>,
    assets: Arc<MockAssetStore>,
    config: LifecycleConfig,
}

impl System {
    async fn new() -> Self {
        let assets = Arc::new(MockAssetStore::new());
        assets.add_file("/src/tfa/sms/send.twig", "send").await;
        assets.add_file("/src/tfa/sms/input.twig", "input").await;

        Self {
            methods: Arc::new(MockMethodRepository::new()),
            global_config: Arc::new(MockGlobalConfigRepository::new()),
            pages: Arc::new(MockPageRepository::new()),
            page_layouts: Arc::new(MockPageLayoutRepository::new()),
            assets,
            config: LifecycleConfig::sms(&PluginConfig::new("/theme", "/src")),
        }
    }

    /// A controller over this system, as the host builds one per operation
    fn controller(&self, state: LifecycleState) -> LifecycleController {
        LifecycleController::new(
            MethodRegistry::new(self.methods.clone(), self.global_config.clone()),
            TemplateAssetInstaller::new(self.assets.clone()),
            PageRegistrar::new(self.pages.clone(), self.page_layouts.clone(), self.config.layout_id),
            self.config.clone(),
            state,
        )
    }
}

#[tokio::test]
async fn test_full_lifecycle_across_invocations() {
    let system = System::new().await;

    let mut controller = system.controller(LifecycleState::Uninstalled);
    controller.enable().await.unwrap();
    assert_eq!(controller.state(), LifecycleState::Enabled);

    let mut controller = system.controller(LifecycleState::Enabled);
    controller.disable().await.unwrap();
    assert_eq!(controller.state(), LifecycleState::Disabled);

    let mut controller = system.controller(LifecycleState::Disabled);
    controller.uninstall().await.unwrap();
    assert_eq!(controller.state(), LifecycleState::Uninstalled);

    let sms = system.methods.find_by_name("SMS").await.unwrap().unwrap();
    assert!(sms.is_disabled);
    assert!(system.pages.get_all().await.is_empty());
    assert!(system.page_layouts.get_all().await.is_empty());
    assert!(!system.assets.exists(&system.config.asset_root).await.unwrap());
}

#[tokio::test]
async fn test_disable_leaves_other_methods_and_shared_config() {
    let system = System::new().await;
    system
        .methods
        .upsert(TwoFactorAuthMethod::new("APP", "plg_customer_2fa_auth_type_app"))
        .await
        .unwrap();
    let mut shared = TwoFactorAuthGlobalConfig::default();
    shared.exclude_route("plg_customer_2fa_auth_type_app");
    system.global_config.upsert(shared).await.unwrap();

    let mut controller = system.controller(LifecycleState::Uninstalled);
    controller.enable().await.unwrap();
    controller.disable().await.unwrap();

    let app = system.methods.find_by_name("APP").await.unwrap().unwrap();
    assert!(app.is_enabled());

    let config = system.global_config.find(1).await.unwrap().unwrap();
    assert_eq!(config.exclude_routes, vec!["plg_customer_2fa_auth_type_app"]);
}

#[tokio::test]
async fn test_reinstall_keeps_customised_route() {
    let system = System::new().await;
    system
        .methods
        .upsert(TwoFactorAuthMethod::new("SMS", "custom_sms_route"))
        .await
        .unwrap();

    let mut controller = system.controller(LifecycleState::Uninstalled);
    controller.uninstall().await.unwrap();
    controller.enable().await.unwrap();

    let sms = system.methods.find_by_name("SMS").await.unwrap().unwrap();
    assert!(sms.is_enabled());
    assert_eq!(sms.route, "custom_sms_route");
    assert_eq!(system.methods.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_interrupted_enable_converges_on_rerun() {
    let system = System::new().await;
    system.page_layouts.set_should_fail(true);

    let mut controller = system.controller(LifecycleState::Uninstalled);
    assert!(controller.enable().await.is_err());
    assert_eq!(controller.state(), LifecycleState::Uninstalled);

    // Steps before the failing one stay applied, no page is written without its layout
    assert!(system.methods.find_by_name("SMS").await.unwrap().unwrap().is_enabled());
    assert!(system.assets.exists(&system.config.asset_destination).await.unwrap());
    assert!(system.pages.get_all().await.is_empty());

    system.page_layouts.set_should_fail(false);
    controller.enable().await.unwrap();

    assert_eq!(controller.state(), LifecycleState::Enabled);
    let pages = system.pages.get_all().await;
    assert_eq!(pages.len(), 2);
    for page in &pages {
        assert!(system
            .page_layouts
            .find(page.id, system.config.layout_id)
            .await
            .unwrap()
            .is_some());
    }
    assert_eq!(system.page_layouts.get_all().await.len(), 2);
}
