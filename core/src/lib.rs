//! # Kinderlog Core
//!
//! Core business logic and domain layer for the Kinderlog backend.
//! This crate contains the domain entities, repository interfaces, the JWT
//! token provider, and the authentication and diary services that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
