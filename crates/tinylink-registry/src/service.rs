use crate::settings::RegistrySettings;
use async_trait::async_trait;
use std::sync::Arc;
use tinylink_core::{Namespace, Registry, RegistryError, Resolution, ShortCode, Store};
use tinylink_generator::CodeGenerator;
use tracing::{debug, trace, warn};

/// Outcome of trying to bind a code to a URL.
enum Claim {
    /// The slot was vacant and now holds the URL.
    Created,
    /// The slot already held the same URL.
    Existing,
    /// The slot holds a different URL.
    Conflict(String),
}

/// A concrete implementation of the [`Registry`] trait.
///
/// This service wraps a [`Store`] and a [`CodeGenerator`] to handle:
/// - URL validation
/// - Stable code derivation with idempotent re-shortening
/// - Collision escape through salted re-derivation
///
/// Every bind goes through `put_if_absent`, so two URLs racing for the same
/// code cannot overwrite each other. Store errors are not retried.
#[derive(Debug, Clone)]
pub struct RegistryService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    namespace: Namespace,
    max_salted_attempts: u32,
}

impl<S: Store, G: CodeGenerator> RegistryService<S, G> {
    /// Creates a new `RegistryService` owning `store`.
    pub fn new(store: S, generator: G, settings: RegistrySettings) -> Self {
        Self::from_arc(Arc::new(store), generator, settings)
    }

    /// Creates a new `RegistryService` over a store shared with the caller.
    pub fn from_arc(store: Arc<S>, generator: G, settings: RegistrySettings) -> Self {
        Self {
            store,
            generator: Arc::new(generator),
            namespace: settings.namespace,
            max_salted_attempts: settings.max_salted_attempts.max(1),
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Validates that the URL is non-empty and syntactically well formed.
    fn validate_url(url: &str) -> Result<(), RegistryError> {
        if url.is_empty() {
            return Err(RegistryError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        url::Url::parse(url)
            .map(|_| ())
            .map_err(|e| RegistryError::InvalidUrl(format!("{url}: {e}")))
    }

    async fn claim(&self, code: &ShortCode, url: &str) -> Result<Claim, RegistryError> {
        let key = self.namespace.key(code);
        let claim = match self.store.put_if_absent(&key, url).await? {
            None => Claim::Created,
            Some(existing) if existing == url => Claim::Existing,
            Some(existing) => Claim::Conflict(existing),
        };
        Ok(claim)
    }
}

#[async_trait]
impl<S: Store, G: CodeGenerator> Registry for RegistryService<S, G> {
    async fn resolve(&self, url: &str) -> Result<Resolution, RegistryError> {
        Self::validate_url(url)?;

        let code = self.generator.derive(url, false);
        trace!(code = %code, "derived stable code");

        match self.claim(&code, url).await? {
            Claim::Created => {
                debug!(code = %code, "created mapping");
                return Ok(Resolution {
                    short_code: code,
                    created: true,
                });
            }
            Claim::Existing => {
                debug!(code = %code, "mapping already exists");
                return Ok(Resolution {
                    short_code: code,
                    created: false,
                });
            }
            Claim::Conflict(existing) => {
                debug!(code = %code, existing = %existing, "stable code collides");
            }
        }

        for attempt in 1..=self.max_salted_attempts {
            let salted = self.generator.derive(url, true);
            trace!(code = %salted, attempt, "derived salted code");

            match self.claim(&salted, url).await? {
                Claim::Created => {
                    debug!(code = %salted, attempt, "created mapping under salted code");
                    return Ok(Resolution {
                        short_code: salted,
                        created: true,
                    });
                }
                Claim::Existing => {
                    return Ok(Resolution {
                        short_code: salted,
                        created: false,
                    });
                }
                Claim::Conflict(existing) => {
                    debug!(code = %salted, attempt, existing = %existing, "salted code collides");
                }
            }
        }

        warn!(
            attempts = self.max_salted_attempts,
            "gave up finding a free short code"
        );
        Err(RegistryError::CapacityExceeded {
            attempts: self.max_salted_attempts,
        })
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<String>, RegistryError> {
        let url = self.store.get(&self.namespace.key(code)).await?;
        match &url {
            Some(_) => trace!(code = %code, "short code found"),
            None => trace!(code = %code, "short code not found"),
        }
        Ok(url)
    }
}
