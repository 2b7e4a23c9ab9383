//! Books repository
//!
//! All reads filter on `deleted_at IS NULL`; deletion only sets the marker,
//! rows are never physically removed.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a batch of books in a single statement.
    ///
    /// A single INSERT keeps the batch atomic: either every record is
    /// persisted with its assigned id and timestamps, or none is.
    pub async fn insert_batch(&self, books: &[CreateBook]) -> AppResult<Vec<Book>> {
        let authors: Vec<String> = books.iter().map(|b| b.author.clone()).collect();
        let titles: Vec<String> = books.iter().map(|b| b.title.clone()).collect();
        let publishers: Vec<String> = books.iter().map(|b| b.publisher.clone()).collect();

        let rows = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (author, title, publisher)
            SELECT * FROM UNNEST($1::text[], $2::text[], $3::text[])
            RETURNING *
            "#,
        )
        .bind(authors)
        .bind(titles)
        .bind(publishers)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a live book by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Fetch one page of live books, ordered by id ascending
    pub async fn find_page(&self, offset: i64, limit: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE deleted_at IS NULL
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Count live books
    pub async fn count(&self) -> AppResult<i64> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    /// Soft-delete a book by setting its deletion marker
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE books SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
