//! Template events and their dispatch

use std::sync::Arc;

/// Render-time extension point for a single view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEvent {
    view: String,
    snippets: Vec<String>,
}

impl TemplateEvent {
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            snippets: Vec::new(),
        }
    }

    /// Name of the view being rendered, e.g. `@admin/Customer/edit.twig`
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Append a template to include into the view
    pub fn add_snippet(&mut self, template: impl Into<String>) {
        self.snippets.push(template.into());
    }

    /// Templates added so far, in order
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }
}

/// A handler for one or more template events
pub trait EventSubscriber: Send + Sync {
    /// Views this subscriber wants to extend
    fn subscribed_events(&self) -> &[&'static str];

    fn on_template_event(&self, event: &mut TemplateEvent);
}

/// Routes template events to the subscribers registered for their view
#[derive(Default, Clone)]
pub struct EventDispatcher {
    subscribers: Vec<Arc<dyn EventSubscriber>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Run every subscriber registered for `event`'s view, in registration order.
    ///
    /// Returns the number of subscribers invoked.
    pub fn dispatch(&self, event: &mut TemplateEvent) -> usize {
        let mut invoked = 0;
        for subscriber in &self.subscribers {
            if subscriber
                .subscribed_events()
                .iter()
                .any(|view| *view == event.view())
            {
                subscriber.on_template_event(event);
                invoked += 1;
            }
        }

        if invoked > 0 {
            tracing::debug!(view = %event.view(), subscribers = invoked, "Template event dispatched");
        }
        invoked
    }
}
