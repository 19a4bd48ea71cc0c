//! Admin customer edit screen extension

use super::dispatcher::{EventSubscriber, TemplateEvent};

/// View rendered by the host's admin customer edit screen
pub const ADMIN_CUSTOMER_EDIT_VIEW: &str = "@admin/Customer/edit.twig";

/// Fragment adding the SMS two-factor fields to the customer edit form
pub const CUSTOMER_EDIT_SNIPPET: &str =
    "TwoFactorAuthCustomerSms42/Resource/template/admin/customer_edit.twig";

/// Appends the SMS two-factor fragment to the admin customer edit screen
#[derive(Debug, Default, Clone, Copy)]
pub struct AdminCustomerEditHook;

impl EventSubscriber for AdminCustomerEditHook {
    fn subscribed_events(&self) -> &[&'static str] {
        &[ADMIN_CUSTOMER_EDIT_VIEW]
    }

    fn on_template_event(&self, event: &mut TemplateEvent) {
        event.add_snippet(CUSTOMER_EDIT_SNIPPET);
    }
}
