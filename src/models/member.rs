//! Member model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registered library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub email: String,
    /// Normalized ISBNs of the books currently held
    pub borrowed_books: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn holds(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|b| b == isbn)
    }
}

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMember {
    #[validate(length(min = 1, message = "Member ID is required"))]
    pub member_id: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub email: String,
}

/// Update member request. `None` keeps the current value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub email: Option<String>,
}
