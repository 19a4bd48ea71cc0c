//! Lifecycle controller implementation

use std::future::Future;

use crate::errors::DomainResult;
use crate::services::assets::TemplateAssetInstaller;
use crate::services::method_registry::MethodRegistry;
use crate::services::page_registrar::PageRegistrar;

use super::config::LifecycleConfig;
use super::types::{LifecycleState, LifecycleStep};

/// Runs the enable, disable and uninstall sequences
///
/// Steps run strictly in order and the first failure aborts the sequence.
/// Nothing already applied is rolled back; every step is idempotent, so the
/// operator re-runs the same operation to converge.
pub struct LifecycleController {
    methods: MethodRegistry,
    assets: TemplateAssetInstaller,
    pages: PageRegistrar,
    config: LifecycleConfig,
    state: LifecycleState,
}

impl LifecycleController {
    /// Create a controller for a plugin currently in `state`
    pub fn new(
        methods: MethodRegistry,
        assets: TemplateAssetInstaller,
        pages: PageRegistrar,
        config: LifecycleConfig,
        state: LifecycleState,
    ) -> Self {
        Self {
            methods,
            assets,
            pages,
            config,
            state,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Register the method, install the template assets and create the pages
    pub async fn enable(&mut self) -> DomainResult<()> {
        tracing::info!(from = %self.state, method = %self.config.method_name, "Enabling plugin");
        let config = &self.config;

        run_step(
            LifecycleStep::EnableMethod,
            self.methods.enable_method(&config.method_name, &config.method_route),
        )
        .await?;
        run_step(
            LifecycleStep::ExcludeRoutes,
            self.methods.exclude_routes(&config.page_urls()),
        )
        .await?;
        run_step(
            LifecycleStep::InstallAssets,
            self.assets.install(&config.asset_source, &config.asset_destination),
        )
        .await?;
        run_step(LifecycleStep::EnsurePages, self.pages.ensure_pages(&config.pages)).await?;

        self.state = LifecycleState::Enabled;
        tracing::info!("Plugin enabled");
        Ok(())
    }

    /// Disable the method, release its excluded routes, remove the template
    /// assets and delete the pages
    pub async fn disable(&mut self) -> DomainResult<()> {
        tracing::info!(from = %self.state, method = %self.config.method_name, "Disabling plugin");
        self.teardown().await?;
        self.state = LifecycleState::Disabled;
        tracing::info!("Plugin disabled");
        Ok(())
    }

    /// Same teardown as [`disable`](Self::disable); the method row is kept
    /// disabled so a later reinstall recovers its original route.
    pub async fn uninstall(&mut self) -> DomainResult<()> {
        tracing::info!(from = %self.state, method = %self.config.method_name, "Uninstalling plugin");
        self.teardown().await?;
        self.state = LifecycleState::Uninstalled;
        tracing::info!("Plugin uninstalled");
        Ok(())
    }

    async fn teardown(&self) -> DomainResult<()> {
        let config = &self.config;

        run_step(
            LifecycleStep::DisableMethod,
            self.methods.disable_method(&config.method_name),
        )
        .await?;
        run_step(
            LifecycleStep::RestoreRoutes,
            self.methods.restore_routes(&config.page_urls()),
        )
        .await?;
        run_step(
            LifecycleStep::UninstallAssets,
            self.assets.uninstall(&config.asset_root),
        )
        .await?;
        run_step(LifecycleStep::RemovePages, self.pages.remove_pages(&config.pages)).await?;
        Ok(())
    }
}

async fn run_step<T>(
    step: LifecycleStep,
    fut: impl Future<Output = DomainResult<T>>,
) -> DomainResult<T> {
    tracing::debug!(step = %step, "Running lifecycle step");
    fut.await.map_err(|e| {
        tracing::error!(step = %step, error = %e, "Lifecycle step failed");
        e
    })
}
