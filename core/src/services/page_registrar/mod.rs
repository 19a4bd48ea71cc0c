//! Registration of the plugin's auxiliary pages and their layout slots.

mod service;


pub use service::PageRegistrar;
