//! Diary repository interface.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::DiaryRepository;

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockDiaryRepository;
