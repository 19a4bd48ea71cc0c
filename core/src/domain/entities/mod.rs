//! Domain entities representing the plugin's persisted records.

pub mod global_config;
pub mod method;
pub mod page;

// Re-export commonly used types
pub use global_config::{TwoFactorAuthGlobalConfig, GLOBAL_CONFIG_ID};
pub use method::{TwoFactorAuthMethod, SMS_METHOD_NAME};
pub use page::{
    EditType, Layout, NewPage, Page, PageDescriptor, PageLayout,
    DEFAULT_LAYOUT_UNDERLAYER_PAGE, META_ROBOTS_NOINDEX, SMS_INPUT_ONETIME_URL,
    SMS_SEND_ONETIME_URL,
};
