//! Container fixtures for tinylink integration tests.

pub mod error;
pub mod redis;

pub use error::{Result, TestInfraError};
