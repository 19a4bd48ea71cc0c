//! Method registry service implementation

use std::sync::Arc;

use crate::domain::entities::global_config::{TwoFactorAuthGlobalConfig, GLOBAL_CONFIG_ID};
use crate::domain::entities::method::TwoFactorAuthMethod;
use crate::errors::DomainResult;
use crate::repositories::{GlobalConfigRepository, MethodRepository};

/// Enables and disables two-factor methods by name
///
/// Methods are never deleted: disabling only flips `is_disabled`, so a
/// method keeps its identifier and route across disable/enable cycles.
pub struct MethodRegistry {
    methods: Arc<dyn MethodRepository>,
    global_config: Arc<dyn GlobalConfigRepository>,
}

impl MethodRegistry {
    /// Create a new method registry
    pub fn new(
        methods: Arc<dyn MethodRepository>,
        global_config: Arc<dyn GlobalConfigRepository>,
    ) -> Self {
        Self {
            methods,
            global_config,
        }
    }

    /// Make `name` available, creating it with `route` on first use.
    ///
    /// An existing record keeps its original route.
    pub async fn enable_method(&self, name: &str, route: &str) -> DomainResult<TwoFactorAuthMethod> {
        let method = match self.methods.find_by_name(name).await? {
            Some(mut existing) => {
                tracing::debug!(method = name, route = %existing.route, "Re-enabling existing method");
                existing.enable();
                existing
            }
            None => {
                tracing::debug!(method = name, route, "Registering new method");
                TwoFactorAuthMethod::new(name, route)
            }
        };

        let method = self.methods.upsert(method).await?;
        tracing::info!(method = name, id = ?method.id, "Two-factor method enabled");
        Ok(method)
    }

    /// Mark `name` as disabled. Absent methods are left absent.
    ///
    /// Returns the updated method, or `None` if it was never registered.
    pub async fn disable_method(&self, name: &str) -> DomainResult<Option<TwoFactorAuthMethod>> {
        let Some(mut method) = self.methods.find_by_name(name).await? else {
            tracing::debug!(method = name, "Method not registered, nothing to disable");
            return Ok(None);
        };

        method.disable();
        let method = self.methods.upsert(method).await?;
        tracing::info!(method = name, "Two-factor method disabled");
        Ok(Some(method))
    }

    /// Ensure the singleton global configuration exists and lists `routes`
    /// among the routes excluded from the second-factor challenge.
    ///
    /// Only missing routes are appended; nothing is written when all are present.
    pub async fn exclude_routes(&self, routes: &[&str]) -> DomainResult<TwoFactorAuthGlobalConfig> {
        let (mut config, mut changed) = match self.global_config.find(GLOBAL_CONFIG_ID).await? {
            Some(config) => (config, false),
            None => {
                tracing::debug!(id = GLOBAL_CONFIG_ID, "Creating global two-factor configuration");
                (TwoFactorAuthGlobalConfig::default(), true)
            }
        };

        for route in routes {
            changed |= config.exclude_route(route);
        }

        if !changed {
            return Ok(config);
        }
        let config = self.global_config.upsert(config).await?;
        tracing::info!(routes = ?config.exclude_routes, "Excluded routes updated");
        Ok(config)
    }

    /// Take `routes` back out of the excluded routes, leaving every other
    /// entry untouched.
    ///
    /// A missing singleton is not created; nothing is written when none of
    /// `routes` is listed.
    pub async fn restore_routes(&self, routes: &[&str]) -> DomainResult<Option<TwoFactorAuthGlobalConfig>> {
        let Some(mut config) = self.global_config.find(GLOBAL_CONFIG_ID).await? else {
            tracing::debug!(id = GLOBAL_CONFIG_ID, "No global configuration, nothing to restore");
            return Ok(None);
        };

        let mut changed = false;
        for route in routes {
            changed |= config.include_route(route);
        }

        if !changed {
            return Ok(Some(config));
        }
        let config = self.global_config.upsert(config).await?;
        tracing::info!(routes = ?config.exclude_routes, "Excluded routes restored");
        Ok(Some(config))
    }
}
