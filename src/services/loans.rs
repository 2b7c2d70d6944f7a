//! Loan management service

use chrono::Utc;

use crate::{
    config::LibraryConfig,
    error::{AppError, AppResult},
    models::{book::normalize_isbn, member::Member},
    repository::Repository,
};

pub struct LoansService<'a> {
    repository: &'a mut Repository,
    config: &'a LibraryConfig,
}

impl<'a> LoansService<'a> {
    pub fn new(repository: &'a mut Repository, config: &'a LibraryConfig) -> Self {
        Self { repository, config }
    }

    /// Lend one copy of a book to a member
    pub fn borrow_book(&mut self, member_id: &str, isbn: &str) -> AppResult<Member> {
        let member_id = member_id.trim();
        let isbn = normalize_isbn(isbn);

        // Verify member and book exist
        let member = self.repository.members.get(member_id)?;
        let book = self.repository.books.get(&isbn)?;

        if member.holds(&isbn) {
            return Err(AppError::BusinessRule(format!(
                "Member {} has already borrowed '{}'",
                member_id, book.title
            )));
        }

        let max_loans = self.config.max_loans_per_member;
        if member.borrowed_books.len() >= max_loans {
            tracing::warn!(member_id, max_loans, "Loans: borrow limit reached");
            return Err(AppError::BusinessRule(format!(
                "Maximum loans reached ({}/{})",
                member.borrowed_books.len(),
                max_loans
            )));
        }

        let borrowed = self.repository.members.borrowed_count(&isbn);
        if borrowed >= book.total_copies {
            tracing::warn!(%isbn, borrowed, "Loans: no copy available");
            return Err(AppError::BusinessRule(format!(
                "No copies of '{}' are available",
                book.title
            )));
        }

        let member = self.repository.members.get_mut(member_id)?;
        member.borrowed_books.push(isbn.clone());
        member.updated_at = Utc::now();

        tracing::info!(member_id, %isbn, "Loans: book borrowed");
        Ok(member.clone())
    }

    /// Take back a book the member currently holds
    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> AppResult<Member> {
        let member_id = member_id.trim();
        let isbn = normalize_isbn(isbn);

        let member = self.repository.members.get_mut(member_id)?;
        let index = member
            .borrowed_books
            .iter()
            .position(|b| *b == isbn)
            .ok_or_else(|| {
                AppError::BusinessRule(format!(
                    "Member {} has not borrowed book {}",
                    member_id, isbn
                ))
            })?;
        member.borrowed_books.remove(index);
        member.updated_at = Utc::now();

        tracing::info!(member_id, %isbn, "Loans: book returned");
        Ok(member.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{book::CreateBook, member::CreateMember},
        services::Services,
    };

    fn services_with(max_loans: usize) -> Services {
        let config = LibraryConfig {
            max_loans_per_member: max_loans,
            ..LibraryConfig::default()
        };
        let mut services = Services::new(Repository::new(), config);
        for (isbn, copies) in [("111", 1), ("222", 2), ("333", 3)] {
            services
                .catalog()
                .add_book(CreateBook {
                    isbn: isbn.to_string(),
                    title: format!("Book {}", isbn),
                    author: "Author".to_string(),
                    genre: "History".to_string(),
                    total_copies: copies,
                })
                .unwrap();
        }
        for id in ["m1", "m2"] {
            services
                .members()
                .add_member(CreateMember {
                    member_id: id.to_string(),
                    name: id.to_uppercase(),
                    email: String::new(),
                })
                .unwrap();
        }
        services
    }

    #[test]
    fn test_borrow_and_return() {
        let mut services = services_with(5);
        let member = services.loans().borrow_book("m1", "1-1-1").unwrap();
        assert_eq!(member.borrowed_books, vec!["111"]);
        assert_eq!(services.catalog().list_books()[0].available, 0);

        let member = services.loans().return_book("m1", "111").unwrap();
        assert!(member.borrowed_books.is_empty());
        assert_eq!(services.catalog().list_books()[0].available, 1);
    }

    #[test]
    fn test_borrow_unavailable() {
        let mut services = services_with(5);
        services.loans().borrow_book("m1", "111").unwrap();
        let err = services.loans().borrow_book("m2", "111").unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(ref m) if m.contains("No copies")));
    }

    #[test]
    fn test_borrow_same_book_twice() {
        let mut services = services_with(5);
        services.loans().borrow_book("m1", "222").unwrap();
        let err = services.loans().borrow_book("m1", "222").unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(ref m) if m.contains("already borrowed")));
    }

    #[test]
    fn test_borrow_limit() {
        let mut services = services_with(2);
        services.loans().borrow_book("m1", "111").unwrap();
        services.loans().borrow_book("m1", "222").unwrap();
        let err = services.loans().borrow_book("m1", "333").unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(ref m) if m.contains("Maximum loans")));
    }

    #[test]
    fn test_borrow_unknown_member_or_book() {
        let mut services = services_with(5);
        assert!(matches!(services.loans().borrow_book("zz", "111"), Err(AppError::NotFound(_))));
        assert!(matches!(services.loans().borrow_book("m1", "999"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_return_not_borrowed() {
        let mut services = services_with(5);
        let err = services.loans().return_book("m1", "111").unwrap_err();
        assert!(matches!(err, AppError::BusinessRule(_)));
        let err = services.loans().return_book("zz", "111").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
