//! Registry of the two-factor methods offered to customers.

mod service;


pub use service::MethodRegistry;
