use async_trait::async_trait;
use redis::AsyncCommands;
use tinylink_core::store::Result;
use tinylink_core::{ReadStore, StorageError, Store};
use tracing::{debug, trace, warn};

/// Redis implementation of the [`Store`] trait.
///
/// Values are stored as raw strings under the keys handed in by the caller.
/// `put_if_absent` is a single `SET key value NX GET`, which needs Redis 7.0
/// or later.
#[derive(Clone)]
pub struct RedisStore {
    conn: redis::aio::MultiplexedConnection,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisStore {
    /// Creates a store from an existing multiplexed connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Creates a store by opening a new connection to `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .map_err(|e| map_redis_error("invalid redis url", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to redis", e))?;
        Ok(Self::new(conn))
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl ReadStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "fetching value from redis");

        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            warn!(key, error = %e, "redis error on get");
            map_redis_error("failed to fetch value from redis", e)
        })
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn put(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "writing value to redis");

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            warn!(key, error = %e, "redis error on set");
            map_redis_error("failed to write value to redis", e)
        })?;

        debug!(key, "wrote value to redis");
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>> {
        trace!(key, "conditionally writing value to redis");

        let mut conn = self.conn.clone();
        let previous: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("GET")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                warn!(key, error = %e, "redis error on conditional set");
                map_redis_error("failed to conditionally write value to redis", e)
            })?;

        match previous {
            Some(_) => debug!(key, "key already present in redis"),
            None => debug!(key, "wrote value to vacant redis key"),
        }
        Ok(previous)
    }
}
