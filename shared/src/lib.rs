//! # Kinderlog Shared
//!
//! Shared configuration and wire types used across the Kinderlog backend
//! crates. This crate has no business logic of its own: it holds the
//! environment-driven configuration structs and the common error response
//! shape the API layer serializes.

pub mod config;
pub mod types;
