//! Global two-factor configuration repository module.

mod r#trait;
pub use r#trait::GlobalConfigRepository;

mod mock;
pub use mock::MockGlobalConfigRepository;

#[cfg(test)]
mod tests;
