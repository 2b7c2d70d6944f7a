//! Book (catalog entry) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book record, keyed by its normalized ISBN in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub total_copies: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book with copy counts derived from the members' borrowed lists
#[derive(Debug, Clone, Serialize)]
pub struct BookAvailability {
    pub book: Book,
    pub borrowed: u32,
    pub available: u32,
}

/// Short book representation for search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookShort {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
        }
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub genre: String,
    pub total_copies: u32,
}

/// Update book request. `None` keeps the current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: Option<String>,
    pub genre: Option<String>,
    pub total_copies: Option<u32>,
}

/// Normalize an ISBN for use as a catalog key.
///
/// Hyphens and whitespace are dropped so that `978-0-14-044913-6` and
/// `9780140449136` refer to the same book.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}
