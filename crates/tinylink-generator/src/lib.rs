//! Short code derivation for tinylink.
//!
//! A [`CodeGenerator`] turns a URL into a [`ShortCode`]. The stable path is
//! deterministic so that shortening the same URL twice lands on the same
//! store key; the salted path exists only to escape a collision.

pub mod hash;
pub mod salt;

pub use hash::{HashGenerator, HashSettings};
pub use salt::{RandomSalt, SaltSource};

use tinylink_core::ShortCode;

/// Trait for deriving short codes from URLs.
///
/// Implementations are pure generators that don't interact with storage and
/// keep no state between calls.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Derives a short code for `url`.
    ///
    /// With `salted = false` the result must be the same for every call with
    /// the same `url`. With `salted = true` repeated calls should yield
    /// different codes with high probability.
    fn derive(&self, url: &str, salted: bool) -> ShortCode;
}
