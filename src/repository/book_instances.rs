//! Book instances repository for database operations.
//!
//! List queries order by `due_back` ascending with unset due dates first,
//! matching the copy listing invariant.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{
            BookInstance, BookInstanceQuery, CreateBookInstance, UpdateBookInstance,
        },
        enums::LoanStatus,
    },
};

const SELECT_INSTANCE: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status, bi.borrower_id,
           b.title AS book_title
    FROM book_instances bi
    LEFT JOIN books b ON b.id = bi.book_id
"#;

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List instances with pagination and the admin list filters
    /// (status, due date range)
    pub async fn list(
        &self,
        query: &BookInstanceQuery,
    ) -> AppResult<(Vec<BookInstance>, i64)> {
        let (per_page, offset) = super::page_bounds(query.page, query.per_page);

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM book_instances bi
            WHERE ($1::smallint IS NULL OR bi.status = $1)
              AND ($2::date IS NULL OR bi.due_back <= $2)
              AND ($3::date IS NULL OR bi.due_back >= $3)
            "#,
        )
        .bind(query.status)
        .bind(query.due_before)
        .bind(query.due_after)
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            r#"{SELECT_INSTANCE}
            WHERE ($1::smallint IS NULL OR bi.status = $1)
              AND ($2::date IS NULL OR bi.due_back <= $2)
              AND ($3::date IS NULL OR bi.due_back >= $3)
            ORDER BY bi.due_back ASC NULLS FIRST, bi.id
            LIMIT $4 OFFSET $5
            "#
        );

        let instances = sqlx::query_as::<_, BookInstance>(&sql)
            .bind(query.status)
            .bind(query.due_before)
            .bind(query.due_after)
            .bind(per_page)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok((instances, total))
    }

    /// List all copies of a book
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        let sql = format!(
            r#"{SELECT_INSTANCE}
            WHERE bi.book_id = $1
            ORDER BY bi.due_back ASC NULLS FIRST, bi.id
            "#
        );

        let instances = sqlx::query_as::<_, BookInstance>(&sql)
            .bind(book_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(instances)
    }

    /// Get instance by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookInstance> {
        let sql = format!("{SELECT_INSTANCE} WHERE bi.id = $1");

        sqlx::query_as::<_, BookInstance>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Create a new instance. The opaque ID is generated here; status
    /// defaults to `Maintenance`.
    pub async fn create(&self, instance: &CreateBookInstance) -> AppResult<BookInstance> {
        let id = Uuid::new_v4();
        let status = i16::from(instance.status.unwrap_or_default());

        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, status, borrower_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.due_back)
        .bind(status)
        .bind(instance.borrower_id)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update an existing instance
    pub async fn update(&self, id: Uuid, instance: &UpdateBookInstance) -> AppResult<BookInstance> {
        sqlx::query(
            r#"
            UPDATE book_instances SET
                imprint = COALESCE($1::text, imprint),
                status = COALESCE($2::smallint, status)
            WHERE id = $3
            "#,
        )
        .bind(instance.imprint.as_deref())
        .bind(instance.status.map(i16::from))
        .bind(id)
        .execute(&self.pool)
        .await?;

        // Double-option fields: explicit null clears, absent leaves alone
        if let Some(book_id) = instance.book_id {
            sqlx::query("UPDATE book_instances SET book_id = $1 WHERE id = $2")
                .bind(book_id)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        if let Some(due_back) = instance.due_back {
            sqlx::query("UPDATE book_instances SET due_back = $1 WHERE id = $2")
                .bind(due_back)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }
        if let Some(borrower_id) = instance.borrower_id {
            sqlx::query("UPDATE book_instances SET borrower_id = $1 WHERE id = $2")
                .bind(borrower_id)
                .bind(id)
                .execute(&self.pool)
                .await?;
        }

        self.get_by_id(id).await
    }

    /// Delete an instance
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }

    /// Mark an on-loan copy as returned: status becomes `Available`,
    /// due date and borrower are cleared. Only valid from `OnLoan`.
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<BookInstance> {
        let instance = self.get_by_id(id).await?;

        if instance.loan_status() != LoanStatus::OnLoan {
            return Err(AppError::BusinessRule(format!(
                "Book instance {} is not on loan",
                id
            )));
        }

        sqlx::query(
            r#"
            UPDATE book_instances
            SET status = $1, due_back = NULL, borrower_id = NULL
            WHERE id = $2
            "#,
        )
        .bind(i16::from(LoanStatus::Available))
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_by_id(id).await
    }
}
