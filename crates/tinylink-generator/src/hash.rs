use crate::salt::{RandomSalt, SaltSource};
use crate::CodeGenerator;
use tinylink_core::ShortCode;
use typed_builder::TypedBuilder;
use xxhash_rust::xxh32::xxh32;

/// Configures a [`HashGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct HashSettings {
    /// Seed of the stable derivation path.
    ///
    /// Changing it changes every stable code, so it must stay fixed for the
    /// lifetime of a deployment's data.
    #[builder(default = 0)]
    pub seed: u32,
}

impl Default for HashSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Derives short codes from the xxHash32 of the URL bytes, base62 encoded.
///
/// Codes are not padded: they are 1 to 6 characters long.
#[derive(Debug, Clone)]
pub struct HashGenerator<S = RandomSalt> {
    seed: u32,
    salt: S,
}

impl HashGenerator<RandomSalt> {
    /// Creates a generator whose salted path draws from the thread RNG.
    pub fn new(settings: HashSettings) -> Self {
        Self::with_salt_source(settings, RandomSalt)
    }
}

impl Default for HashGenerator<RandomSalt> {
    fn default() -> Self {
        Self::new(HashSettings::default())
    }
}

impl<S: SaltSource> HashGenerator<S> {
    pub fn with_salt_source(settings: HashSettings, salt: S) -> Self {
        Self {
            seed: settings.seed,
            salt,
        }
    }

    /// The seed used on the stable path.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn salted_seed(&self) -> u32 {
        // A salt equal to the stable seed would reproduce the colliding code.
        let salt = self.salt.next_salt();
        if salt == self.seed {
            salt.wrapping_add(1)
        } else {
            salt
        }
    }
}

impl<S: SaltSource> CodeGenerator for HashGenerator<S> {
    fn derive(&self, url: &str, salted: bool) -> ShortCode {
        let seed = if salted { self.salted_seed() } else { self.seed };
        ShortCode::from_hash(xxh32(url.as_bytes(), seed))
    }
}
