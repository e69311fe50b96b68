/// Source of the seeds used on the salted derivation path.
pub trait SaltSource: Send + Sync + 'static {
    /// Returns the next salt value.
    fn next_salt(&self) -> u32;
}

/// Draws salts from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSalt;

impl SaltSource for RandomSalt {
    fn next_salt(&self) -> u32 {
        rand::random::<u32>()
    }
}
