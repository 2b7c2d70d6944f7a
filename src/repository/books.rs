//! Books repository: the ISBN-keyed catalog

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Debug, Default)]
pub struct BooksRepository {
    books: IndexMap<String, Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get book by normalized ISBN
    pub fn get(&self, isbn: &str) -> AppResult<&Book> {
        self.books
            .get(isbn)
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    pub fn get_mut(&mut self, isbn: &str) -> AppResult<&mut Book> {
        self.books
            .get_mut(isbn)
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    /// Insert a new book; the ISBN must not already be present
    pub fn insert(&mut self, book: Book) -> AppResult<&Book> {
        if self.books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "A book with ISBN {} already exists",
                book.isbn
            )));
        }
        let (index, _) = self.books.insert_full(book.isbn.clone(), book);
        Ok(&self.books[index])
    }

    /// Remove a book, keeping the remaining books in insertion order
    pub fn remove(&mut self, isbn: &str) -> AppResult<Book> {
        self.books
            .shift_remove(isbn)
            .ok_or_else(|| AppError::NotFound(format!("Book with ISBN {} not found", isbn)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }
}
