//! Get-or-create registry of short code mappings.
//!
//! [`RegistryService`] composes a [`CodeGenerator`][tinylink_generator::CodeGenerator]
//! with a [`Store`][tinylink_core::Store] and owns the collision policy:
//! a stable code first, then a bounded number of salted re-derivations.

pub mod service;
pub mod settings;

pub use service::RegistryService;
pub use settings::RegistrySettings;
pub use tinylink_core::{Registry, RegistryError, Resolution};
