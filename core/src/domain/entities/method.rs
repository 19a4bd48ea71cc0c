//! Two-factor authentication method entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name under which the SMS method is registered
pub const SMS_METHOD_NAME: &str = "SMS";

/// A challenge mechanism customers can use for their second factor
///
/// Records are unique by `name`. Disabling a method toggles `is_disabled`
/// and never deletes the row, so the original route survives re-enabling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorAuthMethod {
    /// Storage identifier, `None` until first persisted
    pub id: Option<i64>,

    /// Unique method name (e.g. "SMS")
    pub name: String,

    /// Route the customer is sent to when this method is chosen
    pub route: String,

    /// Whether the method is currently unavailable
    pub is_disabled: bool,

    /// Timestamp of the last change
    pub updated_at: DateTime<Utc>,
}

impl TwoFactorAuthMethod {
    /// Create a new, enabled method
    pub fn new(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            route: route.into(),
            is_disabled: false,
            updated_at: Utc::now(),
        }
    }

    /// Mark the method as available
    pub fn enable(&mut self) {
        self.is_disabled = false;
        self.updated_at = Utc::now();
    }

    /// Mark the method as unavailable
    pub fn disable(&mut self) {
        self.is_disabled = true;
        self.updated_at = Utc::now();
    }

    pub fn is_enabled(&self) -> bool {
        !self.is_disabled
    }
}
