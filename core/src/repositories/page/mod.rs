//! Page repository module.

mod r#trait;
pub use r#trait::PageRepository;

mod mock;
pub use mock::MockPageRepository;

#[cfg(test)]
mod tests;
