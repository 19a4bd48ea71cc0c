//! Cross-method two-factor configuration.

use serde::{Deserialize, Serialize};

/// Fixed identifier of the singleton configuration record
pub const GLOBAL_CONFIG_ID: i64 = 1;

/// Singleton holding settings shared by every two-factor method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorAuthGlobalConfig {
    /// Always [`GLOBAL_CONFIG_ID`]
    pub id: i64,

    /// Routes reachable without completing the second factor
    pub exclude_routes: Vec<String>,
}

impl Default for TwoFactorAuthGlobalConfig {
    fn default() -> Self {
        Self {
            id: GLOBAL_CONFIG_ID,
            exclude_routes: Vec::new(),
        }
    }
}

impl TwoFactorAuthGlobalConfig {
    /// Add `route` to the excluded routes unless already listed.
    ///
    /// Returns `true` if the list changed.
    pub fn exclude_route(&mut self, route: &str) -> bool {
        if self.is_excluded(route) {
            return false;
        }
        self.exclude_routes.push(route.to_string());
        true
    }

    /// Drop `route` from the excluded routes.
    ///
    /// Returns `true` if it was listed.
    pub fn include_route(&mut self, route: &str) -> bool {
        let before = self.exclude_routes.len();
        self.exclude_routes.retain(|r| r != route);
        self.exclude_routes.len() != before
    }

    pub fn is_excluded(&self, route: &str) -> bool {
        self.exclude_routes.iter().any(|r| r == route)
    }
}
