//! Members repository

use crate::{
    error::{AppError, AppResult},
    models::member::Member,
};

#[derive(Debug, Default)]
pub struct MembersRepository {
    members: Vec<Member>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get member by ID
    pub fn get(&self, member_id: &str) -> AppResult<&Member> {
        self.members
            .iter()
            .find(|m| m.member_id == member_id)
            .ok_or_else(|| not_found(member_id))
    }

    pub fn get_mut(&mut self, member_id: &str) -> AppResult<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.member_id == member_id)
            .ok_or_else(|| not_found(member_id))
    }

    pub fn exists(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.member_id == member_id)
    }

    /// Register a new member; the ID must not already be taken
    pub fn insert(&mut self, member: Member) -> AppResult<&Member> {
        if self.exists(&member.member_id) {
            return Err(AppError::Conflict(format!(
                "A member with ID {} already exists",
                member.member_id
            )));
        }
        self.members.push(member);
        Ok(&self.members[self.members.len() - 1])
    }

    pub fn remove(&mut self, member_id: &str) -> AppResult<Member> {
        let index = self
            .members
            .iter()
            .position(|m| m.member_id == member_id)
            .ok_or_else(|| not_found(member_id))?;
        Ok(self.members.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Number of copies of a book currently held across all members
    pub fn borrowed_count(&self, isbn: &str) -> u32 {
        self.members
            .iter()
            .flat_map(|m| m.borrowed_books.iter())
            .filter(|b| *b == isbn)
            .count()
            .try_into()
            .unwrap_or(u32::MAX)
    }
}

fn not_found(member_id: &str) -> AppError {
    AppError::NotFound(format!("Member with ID {} not found", member_id))
}
