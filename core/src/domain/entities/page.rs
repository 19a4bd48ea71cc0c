//! Page, layout and layout-slot entities.
//!
//! A page is an admin-registrable, URL-addressable screen of the host
//! platform. Every page the plugin registers is placed into exactly one
//! layout through a [`PageLayout`] slot, whose lifetime is tied to the page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the host platform's default layout for underlayer pages
pub const DEFAULT_LAYOUT_UNDERLAYER_PAGE: i64 = 2;

/// Robots directive applied to every page registered by the plugin
pub const META_ROBOTS_NOINDEX: &str = "noindex";

/// URL key of the page where the customer enters the SMS destination
pub const SMS_SEND_ONETIME_URL: &str = "plg_customer_2fa_sms_send_onetime";

/// URL key of the page where the customer enters the received one-time code
pub const SMS_INPUT_ONETIME_URL: &str = "plg_customer_2fa_sms_input_onetime";

/// How a page may be edited from the host's admin screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// Created and freely editable by the shop owner
    User,
    /// Managed by the platform or a plugin; not deletable from the admin screen
    Default,
}

impl EditType {
    /// Convert to the integer representation used in storage
    pub fn as_i16(&self) -> i16 {
        match self {
            Self::User => 0,
            Self::Default => 2,
        }
    }

    /// Parse from the integer representation used in storage
    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            0 => Some(Self::User),
            2 => Some(Self::Default),
            _ => None,
        }
    }
}

/// Description of a page the plugin needs, keyed by its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Unique URL key (route name) of the page
    pub url_key: String,

    /// Name shown in the admin page list
    pub display_name: String,

    /// Template rendered for the page, without extension
    pub template_file: String,
}

impl PageDescriptor {
    pub fn new(
        url_key: impl Into<String>,
        display_name: impl Into<String>,
        template_file: impl Into<String>,
    ) -> Self {
        Self {
            url_key: url_key.into(),
            display_name: display_name.into(),
            template_file: template_file.into(),
        }
    }

    /// The two pages of the SMS challenge flow
    pub fn sms_defaults() -> Vec<Self> {
        vec![
            Self::new(
                SMS_SEND_ONETIME_URL,
                "SMS認証送信先入力",
                "TwoFactorAuthCustomer42/Resource/template/default/tfa/sms/send",
            ),
            Self::new(
                SMS_INPUT_ONETIME_URL,
                "SMS認証トークン入力",
                "TwoFactorAuthCustomer42/Resource/template/default/tfa/sms/input",
            ),
        ]
    }
}

/// A page that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPage {
    pub url: String,
    pub name: String,
    pub file_name: String,
    pub edit_type: EditType,
    pub meta_robots: Option<String>,
}

impl From<&PageDescriptor> for NewPage {
    fn from(descriptor: &PageDescriptor) -> Self {
        Self {
            url: descriptor.url_key.clone(),
            name: descriptor.display_name.clone(),
            file_name: descriptor.template_file.clone(),
            edit_type: EditType::Default,
            meta_robots: Some(META_ROBOTS_NOINDEX.to_string()),
        }
    }
}

/// A stored page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Storage-generated identifier
    pub id: i64,
    pub url: String,
    pub name: String,
    pub file_name: String,
    pub edit_type: EditType,
    pub meta_robots: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Page {
    /// Materialize a [`NewPage`] once storage has assigned its identifier
    pub fn from_new(id: i64, page: NewPage) -> Self {
        Self {
            id,
            url: page.url,
            name: page.name,
            file_name: page.file_name,
            edit_type: page.edit_type,
            meta_robots: page.meta_robots,
            created_at: Utc::now(),
        }
    }
}

/// A shared layout region pages are placed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: i64,
    pub name: String,
}

impl Layout {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Slot placing a page into a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_id: i64,
    pub layout_id: i64,
    pub sort_no: i32,
}

impl PageLayout {
    /// Slot for `page` in `layout` at the first position
    pub fn first(page: &Page, layout: &Layout) -> Self {
        Self {
            page_id: page.id,
            layout_id: layout.id,
            sort_no: 0,
        }
    }
}
