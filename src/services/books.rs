//! Books service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, PageRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and persist a batch of books.
    ///
    /// Every element is validated before anything is written, so an invalid
    /// element anywhere in the batch rejects the whole request.
    pub async fn create(&self, books: &[CreateBook]) -> AppResult<Vec<Book>> {
        if books.is_empty() {
            return Err(AppError::Validation(
                "At least one book is required".to_string(),
            ));
        }

        for book in books {
            book.check()?;
        }

        self.repository.books.insert_batch(books).await
    }

    /// Get a live book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// Soft-delete a book; missing or already-deleted ids are not found
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.soft_delete(id).await
    }

    /// List one page of live books along with the total live count
    pub async fn list(&self, request: PageRequest) -> AppResult<(Vec<Book>, i64)> {
        let total = self.repository.books.count().await?;
        let books = self
            .repository
            .books
            .find_page(request.offset(), request.limit)
            .await?;
        Ok((books, total))
    }
}
