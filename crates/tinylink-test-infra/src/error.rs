use thiserror::Error;

/// Failure while starting or connecting to a throwaway store container.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("failed to start container: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("failed to reach redis container: {0}")]
    Redis(#[from] redis::RedisError),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redis_errors_are_labelled() {
        let err: TestInfraError =
            redis::RedisError::from(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
                .into();
        assert!(err.to_string().starts_with("failed to reach redis container"), "{err}");
    }
}
