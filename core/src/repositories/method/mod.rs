//! Two-factor method repository module.

mod r#trait;
pub use r#trait::MethodRepository;

mod mock;
pub use mock::MockMethodRepository;

#[cfg(test)]
mod tests;
