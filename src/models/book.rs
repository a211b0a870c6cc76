//! Book (catalog entry) model and related types.
//!
//! A `Book` is the bibliographic record, not a physical copy; copies are
//! tracked as [`super::book_instance::BookInstance`].

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::author::Author;
use super::genre::Genre;
use super::language::Language;

/// Full book model (DB + API). Author, genres and languages are loaded
/// separately via their relation tables.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub summary: String,
    /// 13-character ISBN. Length-checked only, no check-digit validation.
    pub isbn: String,
    pub author_id: Option<i32>,
    // Relations (loaded separately)
    #[sqlx(skip)]
    #[serde(default)]
    pub author: Option<Author>,
    #[sqlx(skip)]
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[sqlx(skip)]
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Book {
    /// Canonical detail-page path for this book
    pub fn absolute_url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    /// Compact genre projection for list views: the first three genre
    /// names joined with ", ". Not authoritative data.
    pub fn display_genre(&self) -> String {
        self.genres
            .iter()
            .take(3)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Short book representation for list views.
/// `author` and `display_genre` are computed by the list query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookShort {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub display_genre: String,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 1000))]
    pub summary: String,
    #[validate(length(equal = 13))]
    pub isbn: String,
    pub author_id: Option<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub language_ids: Vec<i32>,
}

/// Update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 1000))]
    pub summary: Option<String>,
    #[validate(length(equal = 13))]
    pub isbn: Option<String>,
    /// Absent leaves the author untouched; explicit null clears it
    #[serde(default, deserialize_with = "crate::models::deserialize_some")]
    pub author_id: Option<Option<i32>>,
    pub genre_ids: Option<Vec<i32>>,
    pub language_ids: Option<Vec<i32>>,
}

/// Book list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre(id: i32, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
        }
    }

    fn book_with_genres(names: &[&str]) -> Book {
        Book {
            id: 3,
            title: "The Name of the Rose".to_string(),
            summary: "A monastic murder mystery.".to_string(),
            isbn: "9780156001311".to_string(),
            author_id: Some(1),
            author: None,
            genres: names
                .iter()
                .enumerate()
                .map(|(i, n)| genre(i as i32 + 1, n))
                .collect(),
            languages: Vec::new(),
        }
    }

    #[test]
    fn display_genre_caps_at_three() {
        let book = book_with_genres(&["Mystery", "Historical", "Fiction", "Thriller", "Gothic"]);
        assert_eq!(book.display_genre(), "Mystery, Historical, Fiction");
    }

    #[test]
    fn display_genre_handles_fewer_than_three() {
        assert_eq!(book_with_genres(&[]).display_genre(), "");
        assert_eq!(book_with_genres(&["Mystery"]).display_genre(), "Mystery");
    }

    #[test]
    fn absolute_url_uses_numeric_id() {
        assert_eq!(book_with_genres(&[]).absolute_url(), "/catalog/book/3");
    }

    #[test]
    fn display_is_title() {
        assert_eq!(book_with_genres(&[]).to_string(), "The Name of the Rose");
    }
}
