//! Authors repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorQuery, CreateAuthor, UpdateAuthor},
        book::BookShort,
    },
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List authors with pagination, ordered by last name ascending
    pub async fn list(&self, query: &AuthorQuery) -> AppResult<(Vec<Author>, i64)> {
        let (per_page, offset) = super::page_bounds(query.page, query.per_page);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM authors
            WHERE ($1::text IS NULL OR LOWER(last_name) LIKE LOWER($1) || '%')
            "#,
        )
        .bind(query.last_name.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name, date_of_birth, date_of_death
            FROM authors
            WHERE ($1::text IS NULL OR LOWER(last_name) LIKE LOWER($1) || '%')
            ORDER BY last_name, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.last_name.as_deref())
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((authors, total))
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name, date_of_birth, date_of_death FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    /// Create a new author
    pub async fn create(&self, author: &CreateAuthor) -> AppResult<Author> {
        let created = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (first_name, last_name, date_of_birth, date_of_death)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, date_of_birth, date_of_death
            "#,
        )
        .bind(&author.first_name)
        .bind(&author.last_name)
        .bind(author.date_of_birth)
        .bind(author.date_of_death)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update an existing author
    pub async fn update(&self, id: i32, author: &UpdateAuthor) -> AppResult<Author> {
        sqlx::query(
            r#"
            UPDATE authors SET
                first_name = COALESCE($1::text, first_name),
                last_name = COALESCE($2::text, last_name)
            WHERE id = $3
            "#,
        )
        .bind(author.first_name.as_deref())
        .bind(author.last_name.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        // Double-option fields: explicit null clears, absent leaves alone
        if let Some(date_of_birth) = author.date_of_birth {
            sqlx::query("UPDATE authors SET date_of_birth = $1 WHERE id = $2")
                .bind(date_of_birth)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        if let Some(date_of_death) = author.date_of_death {
            sqlx::query("UPDATE authors SET date_of_death = $1 WHERE id = $2")
                .bind(date_of_death)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }

        self.get_by_id(id).await
    }

    /// Delete an author. Their books are kept with `author_id` nulled
    /// (ON DELETE SET NULL), never deleted.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author with id {} not found", id)));
        }
        Ok(())
    }

    /// List all books written by an author
    pub async fn get_books(&self, author_id: i32) -> AppResult<Vec<BookShort>> {
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
            JOIN authors a ON a.id = b.author_id
            WHERE b.author_id = $1
            ORDER BY b.title
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
