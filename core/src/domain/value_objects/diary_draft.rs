//! Editable content of a diary entry.

use chrono::NaiveDate;

/// The caller-supplied fields of a diary entry
///
/// Used both when creating a new entry and when replacing the content of an
/// existing one; ownership and identifiers are never part of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryDraft {
    /// Day the entry is about
    pub date: NaiveDate,

    /// Name of the dog the entry is about
    pub dog_name: String,

    /// Entry title
    pub title: String,

    /// Entry body
    pub content: String,
}
