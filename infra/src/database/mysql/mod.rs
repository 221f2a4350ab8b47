//! MySQL repository implementations

mod diary_repository_impl;
mod kindergarten_repository_impl;

pub use diary_repository_impl::MySqlDiaryRepository;
pub use kindergarten_repository_impl::MySqlKindergartenRepository;
