use tinylink_core::Namespace;
use typed_builder::TypedBuilder;

/// Default number of salted re-derivations after a stable code collides.
pub const DEFAULT_MAX_SALTED_ATTEMPTS: u32 = 3;

/// Configures a [`RegistryService`][crate::RegistryService].
#[derive(Debug, Clone, TypedBuilder)]
pub struct RegistrySettings {
    /// Key prefix separating this registry's mappings from other tenants.
    #[builder(default, setter(into))]
    pub namespace: Namespace,
    /// Salted re-derivations tried before giving up with
    /// `CapacityExceeded`. Values below 1 are raised to 1.
    #[builder(default = DEFAULT_MAX_SALTED_ATTEMPTS)]
    pub max_salted_attempts: u32,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
