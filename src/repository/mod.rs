//! Repository layer: the in-memory book and member collections

pub mod books;
pub mod members;

/// Main repository struct holding both collections
#[derive(Debug, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
            members: members::MembersRepository::new(),
        }
    }
}
