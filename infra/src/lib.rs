//! # Kinderlog Infrastructure
//!
//! Concrete implementations of the core repository and store interfaces:
//! MySQL persistence via SQLx and the Redis-backed refresh token store.

use thiserror::Error;

pub mod cache;
pub mod database;

/// Infrastructure-level errors
///
/// Repository and store implementations translate these into
/// `kl_core::errors::DomainError` at the trait boundary; nothing above the
/// infra crate sees `redis` or `sqlx` error types.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
