//! Plugin manager implementation

use anyhow::Context;

use tfa_core::services::{
    LifecycleConfig, LifecycleController, LifecycleState, MethodRegistry, PageRegistrar,
    TemplateAssetInstaller,
};

use crate::context::PluginContext;
use crate::meta::PluginMeta;

/// Entry points the host calls when the operator enables, disables or
/// uninstalls the plugin
///
/// Each call wires a fresh [`LifecycleController`] from the supplied
/// context, so no collaborator outlives the operation.
#[derive(Debug, Default)]
pub struct PluginManager {
    state: LifecycleState,
}

impl PluginManager {
    /// Create a manager for a plugin the host reports in `state`
    pub fn new(state: LifecycleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub async fn enable(&mut self, meta: &PluginMeta, ctx: &PluginContext) -> anyhow::Result<()> {
        let mut controller = self.controller(ctx);
        controller
            .enable()
            .await
            .with_context(|| format!("Failed to enable plugin {} {}", meta.code, meta.version))?;
        self.state = controller.state();
        Ok(())
    }

    pub async fn disable(&mut self, meta: &PluginMeta, ctx: &PluginContext) -> anyhow::Result<()> {
        let mut controller = self.controller(ctx);
        controller
            .disable()
            .await
            .with_context(|| format!("Failed to disable plugin {} {}", meta.code, meta.version))?;
        self.state = controller.state();
        Ok(())
    }

    pub async fn uninstall(&mut self, meta: &PluginMeta, ctx: &PluginContext) -> anyhow::Result<()> {
        let mut controller = self.controller(ctx);
        controller
            .uninstall()
            .await
            .with_context(|| format!("Failed to uninstall plugin {} {}", meta.code, meta.version))?;
        self.state = controller.state();
        Ok(())
    }

    fn controller(&self, ctx: &PluginContext) -> LifecycleController {
        let config = LifecycleConfig::sms(&ctx.plugin);
        let methods = MethodRegistry::new(ctx.methods.clone(), ctx.global_config.clone());
        let assets = TemplateAssetInstaller::new(ctx.assets.clone());
        let pages = PageRegistrar::new(ctx.pages.clone(), ctx.page_layouts.clone(), config.layout_id);

        LifecycleController::new(methods, assets, pages, config, self.state)
    }
}
