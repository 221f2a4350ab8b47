//! # Kinderlog API
//!
//! HTTP layer of the Kinderlog backend: route handlers generic over the core
//! repository traits, JWT authorization middleware, request/response DTOs,
//! and the centralized domain-error translation.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
