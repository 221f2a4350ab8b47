//! JWT token provider
//!
//! Issues signed access tokens, extracts the principal identity from tokens
//! (tolerating expiry for refresh flows), and strictly validates tokens for
//! request authorization with a classified error taxonomy.

mod config;
mod provider;


pub use config::TokenConfig;
pub use provider::JwtTokenProvider;
