//! Value objects shared between services and the API layer.

mod auth_info;
mod auth_tokens;
mod diary_draft;

pub use auth_info::AuthInfo;
pub use auth_tokens::AuthTokens;
pub use diary_draft::DiaryDraft;
