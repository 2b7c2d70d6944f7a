//! Catalog management service

use chrono::Utc;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use validator::Validate;

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    models::book::{normalize_isbn, Book, BookAvailability, BookShort, CreateBook, UpdateBook},
    repository::Repository,
};

pub struct CatalogService<'a> {
    repository: &'a mut Repository,
    config: &'a LibraryConfig,
}

impl<'a> CatalogService<'a> {
    pub fn new(repository: &'a mut Repository, config: &'a LibraryConfig) -> Self {
        Self { repository, config }
    }

    /// Accepted genres, in display order
    pub fn genres(&self) -> &[String] {
        &self.config.genres
    }

    /// Get a book by ISBN (any hyphenation)
    pub fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get(&normalize_isbn(isbn)).cloned()
    }

    /// Add a new book to the catalog
    pub fn add_book(&mut self, mut book: CreateBook) -> AppResult<Book> {
        book.isbn = normalize_isbn(&book.isbn);
        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();
        book.validate()?;
        let genre = self.resolve_genre(&book.genre)?;

        let now = Utc::now();
        let created = self.repository.books.insert(Book {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            genre,
            total_copies: book.total_copies,
            created_at: now,
            updated_at: now,
        })?;

        tracing::info!(
            isbn = %created.isbn,
            copies = created.total_copies,
            "Catalog: book added"
        );
        Ok(created.clone())
    }

    /// Search books whose title or author contains the query.
    ///
    /// Matching ignores case and diacritics; an empty query matches everything.
    pub fn search_books(&self, query: &str) -> Vec<BookShort> {
        let needle = fold(query.trim());
        let results: Vec<BookShort> = self
            .repository
            .books
            .iter()
            .filter(|b| fold(&b.title).contains(&needle) || fold(&b.author).contains(&needle))
            .map(BookShort::from)
            .collect();
        tracing::debug!("Catalog search {:?}: {} result(s)", query, results.len());
        results
    }

    /// Update an existing book; `None` fields keep their current value
    pub fn update_book(&mut self, isbn: &str, mut update: UpdateBook) -> AppResult<Book> {
        let isbn = normalize_isbn(isbn);
        update.title = update.title.map(|t| t.trim().to_string());
        update.author = update.author.map(|a| a.trim().to_string());
        update.validate()?;
        // Check if book exists
        self.repository.books.get(&isbn)?;

        let genre = update
            .genre
            .as_deref()
            .map(|g| self.resolve_genre(g))
            .transpose()?;

        if let Some(copies) = update.total_copies {
            let borrowed = self.repository.members.borrowed_count(&isbn);
            if copies < borrowed {
                tracing::warn!(%isbn, copies, borrowed, "Catalog: copy reduction refused");
                return Err(AppError::BusinessRule(format!(
                    "Cannot set total copies to {}: {} cop{} currently borrowed",
                    copies,
                    borrowed,
                    if borrowed == 1 { "y is" } else { "ies are" }
                )));
            }
        }

        let book = self.repository.books.get_mut(&isbn)?;
        if let Some(title) = update.title {
            book.title = title;
        }
        if let Some(author) = update.author {
            book.author = author;
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        if let Some(copies) = update.total_copies {
            book.total_copies = copies;
        }
        book.updated_at = Utc::now();

        tracing::info!(isbn = %book.isbn, "Catalog: book updated");
        Ok(book.clone())
    }

    /// Delete a book. Refused while any copy is out on loan.
    pub fn delete_book(&mut self, isbn: &str) -> AppResult<Book> {
        let isbn = normalize_isbn(isbn);
        self.repository.books.get(&isbn)?;

        let borrowed = self.repository.members.borrowed_count(&isbn);
        if borrowed > 0 {
            tracing::warn!(%isbn, borrowed, "Catalog: delete refused, copies on loan");
            return Err(AppError::BusinessRule(format!(
                "Book {} has {} borrowed cop{} and cannot be deleted",
                isbn,
                borrowed,
                if borrowed == 1 { "y" } else { "ies" }
            )));
        }

        let removed = self.repository.books.remove(&isbn)?;
        tracing::info!(isbn = %removed.isbn, "Catalog: book deleted");
        Ok(removed)
    }

    /// All books in catalog order with their availability
    pub fn list_books(&self) -> Vec<BookAvailability> {
        self.repository
            .books
            .iter()
            .map(|book| {
                let borrowed = self.repository.members.borrowed_count(&book.isbn);
                BookAvailability {
                    book: book.clone(),
                    borrowed,
                    available: book.total_copies.saturating_sub(borrowed),
                }
            })
            .collect()
    }

    /// Match a genre against the configured list, returning its canonical spelling.
    /// An empty genre list accepts any non-empty genre.
    fn resolve_genre(&self, genre: &str) -> AppResult<String> {
        let genre = genre.trim();
        if self.config.genres.is_empty() && !genre.is_empty() {
            return Ok(genre.to_string());
        }
        let wanted = genre.to_lowercase();
        self.config
            .genres
            .iter()
            .find(|g| g.to_lowercase() == wanted)
            .cloned()
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid genre '{}'. Available genres: {}",
                    genre,
                    self.config.genres.join(", ")
                ))
            })
    }
}

/// Lowercase and strip diacritics for search comparison
fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
