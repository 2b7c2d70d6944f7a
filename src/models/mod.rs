//! Data models for Mini Library

pub mod book;
pub mod member;

// Re-export commonly used types
pub use book::{normalize_isbn, Book, BookAvailability, BookShort, CreateBook, UpdateBook};
pub use member::{CreateMember, Member, UpdateMember};
