//! MySQL implementations of the core repository ports.
//!
//! Tables follow the host platform's naming: `plg_*` for plugin-owned rows,
//! `dtb_*` for platform rows. Every table carries the platform's
//! `discriminator_type` column.

mod global_config_repository_impl;
mod method_repository_impl;
mod page_layout_repository_impl;
mod page_repository_impl;

pub use global_config_repository_impl::MySqlGlobalConfigRepository;
pub use method_repository_impl::MySqlMethodRepository;
pub use page_layout_repository_impl::MySqlPageLayoutRepository;
pub use page_repository_impl::MySqlPageRepository;

use tfa_core::errors::DomainError;

/// Map a SQLx error into a storage error with context
pub(crate) fn storage_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        DomainError::storage(format!("{}: {}", context, e))
    }
}
