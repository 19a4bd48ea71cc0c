//! Lifecycle state and step types

use serde::{Deserialize, Serialize};

/// Installation state of the plugin as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    #[default]
    Uninstalled,
    Disabled,
    Enabled,
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninstalled => write!(f, "uninstalled"),
            Self::Disabled => write!(f, "disabled"),
            Self::Enabled => write!(f, "enabled"),
        }
    }
}

/// Individual step of a lifecycle operation, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    EnableMethod,
    ExcludeRoutes,
    InstallAssets,
    EnsurePages,
    DisableMethod,
    RestoreRoutes,
    UninstallAssets,
    RemovePages,
}

impl LifecycleStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnableMethod => "enable_method",
            Self::ExcludeRoutes => "exclude_routes",
            Self::InstallAssets => "install_assets",
            Self::EnsurePages => "ensure_pages",
            Self::DisableMethod => "disable_method",
            Self::RestoreRoutes => "restore_routes",
            Self::UninstallAssets => "uninstall_assets",
            Self::RemovePages => "remove_pages",
        }
    }
}

impl std::fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
