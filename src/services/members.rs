//! Member management service

use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    repository::Repository,
};

pub struct MembersService<'a> {
    repository: &'a mut Repository,
}

impl<'a> MembersService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    pub fn get_member(&self, member_id: &str) -> AppResult<Member> {
        self.repository.members.get(member_id.trim()).cloned()
    }

    /// Register a new member
    pub fn add_member(&mut self, mut member: CreateMember) -> AppResult<Member> {
        member.member_id = member.member_id.trim().to_string();
        member.name = member.name.trim().to_string();
        member.email = member.email.trim().to_string();
        member.validate()?;

        let now = Utc::now();
        let created = self.repository.members.insert(Member {
            member_id: member.member_id,
            name: member.name,
            email: member.email,
            borrowed_books: Vec::new(),
            created_at: now,
            updated_at: now,
        })?;

        tracing::info!(member_id = %created.member_id, "Members: member added");
        Ok(created.clone())
    }

    /// Update a member's details; `None` fields keep their current value
    pub fn update_member(
        &mut self,
        member_id: &str,
        mut update: UpdateMember,
    ) -> AppResult<Member> {
        update.name = update.name.map(|n| n.trim().to_string());
        update.email = update.email.map(|e| e.trim().to_string());
        update.validate()?;
        let member = self.repository.members.get_mut(member_id.trim())?;

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        member.updated_at = Utc::now();

        tracing::info!(member_id = %member.member_id, "Members: member updated");
        Ok(member.clone())
    }

    /// Delete a member. Refused while the member still holds books.
    pub fn delete_member(&mut self, member_id: &str) -> AppResult<Member> {
        let member_id = member_id.trim();
        let member = self.repository.members.get(member_id)?;
        if !member.borrowed_books.is_empty() {
            tracing::warn!(
                member_id,
                held = member.borrowed_books.len(),
                "Members: delete refused, books on loan"
            );
            return Err(AppError::BusinessRule(format!(
                "Member {} still has borrowed books: {}",
                member_id,
                member.borrowed_books.join(", ")
            )));
        }

        let removed = self.repository.members.remove(member_id)?;
        tracing::info!(member_id = %removed.member_id, "Members: member deleted");
        Ok(removed)
    }

    /// All members in registration order
    pub fn list_members(&self) -> Vec<Member> {
        self.repository.members.iter().cloned().collect()
    }
}
