//! Data models for the LocalLibrary catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod enums;
pub mod genre;
pub mod language;

/// Deserialization helper for update payloads that must distinguish an
/// absent field (leave untouched) from an explicit `null` (clear the value).
/// Absent fields stay `None` via `#[serde(default)]`; present fields,
/// including `null`, become `Some(..)`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookShort};
pub use book_instance::BookInstance;
pub use enums::LoanStatus;
pub use genre::Genre;
pub use language::Language;
