//! Core types and traits for the tinylink URL shortener.
//!
//! This crate provides the types shared by the code generator, the store
//! backends, the registry and the HTTP gateway.

pub mod base62;
pub mod error;
pub mod namespace;
pub mod registry;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, RegistryError, StorageError};
pub use namespace::Namespace;
pub use registry::{Registry, Resolution, UrlMapping};
pub use shortcode::ShortCode;
pub use store::{ReadStore, Store};
