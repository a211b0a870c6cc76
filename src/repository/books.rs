//! Books repository for database operations.
//!
//! The list queries compute the two display projections used by admin list
//! views in SQL: the author string repr ("last, first") and `display_genre`
//! (first three genre names in insertion order, joined with ", ").

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, BookQuery, BookShort, CreateBook, UpdateBook},
        genre::Genre,
        language::Language,
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Get book by ID with author, genres and languages loaded
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        let mut book = sqlx::query_as::<_, Book>(
            "SELECT id, title, summary, isbn, author_id FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        book.author = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, date_of_birth, date_of_death FROM authors WHERE id = $1",
        )
        .bind(book.author_id)
        .fetch_optional(&self.pool)
        .await?;

        book.genres = self.get_genres(id).await?;
        book.languages = self.get_languages(id).await?;

        Ok(book)
    }

    /// Load all genres attached to a book, in insertion order
    async fn get_genres(&self, book_id: i32) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.id, g.name
            FROM book_genres bg
            JOIN genres g ON g.id = bg.genre_id
            WHERE bg.book_id = $1
            ORDER BY bg.position
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(genres)
    }

    /// Load all languages attached to a book, in insertion order
    async fn get_languages(&self, book_id: i32) -> AppResult<Vec<Language>> {
        let languages = sqlx::query_as::<_, Language>(
            r#"
            SELECT l.id, l.name
            FROM book_languages bl
            JOIN languages l ON l.id = bl.language_id
            WHERE bl.book_id = $1
            ORDER BY bl.position
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(languages)
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Search books with pagination
    pub async fn search(&self, query: &BookQuery) -> AppResult<(Vec<BookShort>, i64)> {
        let (per_page, offset) = super::page_bounds(query.page, query.per_page);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            WHERE ($1::text IS NULL OR LOWER(b.title) LIKE '%' || LOWER($1) || '%')
              AND ($2::text IS NULL OR b.isbn = $2)
              AND ($3::text IS NULL OR (a.id IS NOT NULL AND (
                       LOWER(a.last_name) LIKE '%' || LOWER($3) || '%'
                    OR LOWER(a.first_name) LIKE '%' || LOWER($3) || '%')))
            "#,
        )
        .bind(query.title.as_deref())
        .bind(query.isbn.as_deref())
        .bind(query.author.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let books = sqlx::query_as::<_, BookShort>(
            r#"
            SELECT b.id, b.title,
                   a.last_name || ', ' || a.first_name AS author,
                   COALESCE((
                       SELECT string_agg(name, ', ')
                       FROM (
                           SELECT g.name
                           FROM book_genres bg
                           JOIN genres g ON g.id = bg.genre_id
                           WHERE bg.book_id = b.id
                           ORDER BY bg.position
                           LIMIT 3
                       ) first_genres
                   ), '') AS display_genre
            FROM books b
            LEFT JOIN authors a ON a.id = b.author_id
            WHERE ($1::text IS NULL OR LOWER(b.title) LIKE '%' || LOWER($1) || '%')
              AND ($2::text IS NULL OR b.isbn = $2)
              AND ($3::text IS NULL OR (a.id IS NOT NULL AND (
                       LOWER(a.last_name) LIKE '%' || LOWER($3) || '%'
                    OR LOWER(a.first_name) LIKE '%' || LOWER($3) || '%')))
            ORDER BY b.title
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.title.as_deref())
        .bind(query.isbn.as_deref())
        .bind(query.author.as_deref())
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    // =========================================================================
    // CREATE
    // =========================================================================

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, summary, isbn, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.summary)
        .bind(&book.isbn)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        self.sync_genres(id, &book.genre_ids).await?;
        self.sync_languages(id, &book.language_ids).await?;

        self.get_by_id(id).await
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Update an existing book
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<Book> {
        sqlx::query(
            r#"
            UPDATE books SET
                title = COALESCE($1::text, title),
                summary = COALESCE($2::text, summary),
                isbn = COALESCE($3::text, isbn)
            WHERE id = $4
            "#,
        )
        .bind(book.title.as_deref())
        .bind(book.summary.as_deref())
        .bind(book.isbn.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        // Explicit null clears the author, absent field leaves it alone
        if let Some(author_id) = book.author_id {
            sqlx::query("UPDATE books SET author_id = $1 WHERE id = $2")
                .bind(author_id)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }

        if let Some(ref genre_ids) = book.genre_ids {
            self.sync_genres(id, genre_ids).await?;
        }
        if let Some(ref language_ids) = book.language_ids {
            self.sync_languages(id, language_ids).await?;
        }

        self.get_by_id(id).await
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Delete a book. Its physical copies are kept with `book_id` nulled
    /// (ON DELETE SET NULL), never deleted.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    // =========================================================================
    // GENRES / LANGUAGES (junction tables)
    // =========================================================================

    /// Replace all genres for a book: delete existing rows then insert new
    /// ones, keeping insertion order in `position`.
    async fn sync_genres(&self, book_id: i32, genre_ids: &[i32]) -> AppResult<()> {
        sqlx::query("DELETE FROM book_genres WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        for (idx, genre_id) in genre_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO book_genres (book_id, genre_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (book_id, genre_id) DO UPDATE SET position = $3
                "#,
            )
            .bind(book_id)
            .bind(genre_id)
            .bind((idx + 1) as i16)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    /// Replace all languages for a book, keeping insertion order
    async fn sync_languages(&self, book_id: i32, language_ids: &[i32]) -> AppResult<()> {
        sqlx::query("DELETE FROM book_languages WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        for (idx, language_id) in language_ids.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO book_languages (book_id, language_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (book_id, language_id) DO UPDATE SET position = $3
                "#,
            )
            .bind(book_id)
            .bind(language_id)
            .bind((idx + 1) as i16)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}
