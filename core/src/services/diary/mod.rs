//! Diary service
//!
//! Kindergarten-scoped CRUD over diary entries. Every operation takes the
//! authenticated caller and refuses to touch entries of other kindergartens.

mod service;

#[cfg(test)]
mod tests;

pub use service::DiaryService;
