//! Filesystem module - template asset store on the local disk

pub mod local_asset_store;


pub use local_asset_store::LocalAssetStore;
