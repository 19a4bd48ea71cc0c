use std::sync::Arc;

use crate::event::{
    AdminCustomerEditHook, EventDispatcher, EventSubscriber, TemplateEvent,
    ADMIN_CUSTOMER_EDIT_VIEW, CUSTOMER_EDIT_SNIPPET,
};

struct OtherViewHook;

impl EventSubscriber for OtherViewHook {
    fn subscribed_events(&self) -> &[&'static str] {
        &["@admin/Order/edit.twig"]
    }

    fn on_template_event(&self, event: &mut TemplateEvent) {
        event.add_snippet("Other/order.twig");
    }
}

#[test]
fn test_hook_appends_exactly_one_snippet() {
    let mut event = TemplateEvent::new(ADMIN_CUSTOMER_EDIT_VIEW);
    AdminCustomerEditHook.on_template_event(&mut event);

    assert_eq!(event.snippets(), [CUSTOMER_EDIT_SNIPPET.to_string()]);
}

#[test]
fn test_dispatch_routes_by_view() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(Arc::new(AdminCustomerEditHook));
    dispatcher.subscribe(Arc::new(OtherViewHook));

    let mut customer_edit = TemplateEvent::new(ADMIN_CUSTOMER_EDIT_VIEW);
    assert_eq!(dispatcher.dispatch(&mut customer_edit), 1);
    assert_eq!(
        customer_edit.snippets(),
        ["TwoFactorAuthCustomerSms42/Resource/template/admin/customer_edit.twig".to_string()]
    );

    let mut order_edit = TemplateEvent::new("@admin/Order/edit.twig");
    assert_eq!(dispatcher.dispatch(&mut order_edit), 1);
    assert_eq!(order_edit.snippets(), ["Other/order.twig".to_string()]);
}

#[test]
fn test_dispatch_unrelated_view_leaves_event_untouched() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.subscribe(Arc::new(AdminCustomerEditHook));

    let mut event = TemplateEvent::new("@admin/Customer/index.twig");
    assert_eq!(dispatcher.dispatch(&mut event), 0);
    assert!(event.snippets().is_empty());
}

#[test]
fn test_snippets_keep_existing_entries() {
    let mut event = TemplateEvent::new(ADMIN_CUSTOMER_EDIT_VIEW);
    event.add_snippet("Another/plugin.twig");

    AdminCustomerEditHook.on_template_event(&mut event);

    assert_eq!(event.snippets().len(), 2);
    assert_eq!(event.snippets()[1], CUSTOMER_EDIT_SNIPPET);
}
