//! Template render hooks.
//!
//! The host fires a [`TemplateEvent`] named after the view being rendered.
//! Subscribers registered with an [`EventDispatcher`] may append template
//! snippets that the host includes at the end of that view.

mod dispatcher;
mod hook;

#[cfg(test)]
mod tests;

pub use dispatcher::{EventDispatcher, EventSubscriber, TemplateEvent};
pub use hook::{AdminCustomerEditHook, ADMIN_CUSTOMER_EDIT_VIEW, CUSTOMER_EDIT_SNIPPET};
