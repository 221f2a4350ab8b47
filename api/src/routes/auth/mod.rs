//! Authentication route handlers
//!
//! - Kindergarten signup
//! - Login (token issuance)
//! - Token refresh
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;
pub mod sign_up;
