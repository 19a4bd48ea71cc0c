//! Lifecycle entry points invoked by the host plugin manager

mod plugin_manager;

#[cfg(test)]
mod tests;

pub use plugin_manager::PluginManager;
