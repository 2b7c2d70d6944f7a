//! Member menu actions

use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::member::{CreateMember, UpdateMember},
    services::Services,
};

use super::console::Console;

pub fn add_member<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let member_id = console.prompt("Enter Member ID: ")?;
    let name = console.prompt("Enter Name: ")?;
    let email = console.prompt("Enter Email: ")?;

    services.members().add_member(CreateMember {
        member_id,
        name,
        email,
    })?;
    writeln!(console.out(), "✅ Member added successfully!")?;
    Ok(())
}

pub fn update_member<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let member_id = console.prompt("Enter Member ID to update: ")?;
    let current = match services.members().get_member(&member_id) {
        Ok(member) => member,
        Err(_) => {
            writeln!(console.out(), "❌ Member not found.")?;
            return Ok(());
        }
    };

    writeln!(console.out(), "Leave blank to keep current value.")?;
    let name = console.prompt_optional(&format!("New Name (current: {}): ", current.name))?;
    let email = console.prompt_optional(&format!("New Email (current: {}): ", current.email))?;

    services
        .members()
        .update_member(&current.member_id, UpdateMember { name, email })?;
    writeln!(console.out(), "✏️  Member updated successfully!")?;
    Ok(())
}

pub fn delete_member<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let member_id = console.prompt("Enter Member ID to delete: ")?;
    services.members().delete_member(&member_id)?;
    writeln!(console.out(), "🗑️  Member deleted successfully!")?;
    Ok(())
}

pub fn view_members<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let members = services.members().list_members();

    let out = console.out();
    if members.is_empty() {
        writeln!(out, "\n👥 No members registered.")?;
        return Ok(());
    }
    let rule = "-".repeat(60);
    writeln!(out, "\n👥 Library Members:")?;
    writeln!(out, "{}", rule)?;
    for member in members {
        let borrowed = if member.borrowed_books.is_empty() {
            "None".to_string()
        } else {
            member.borrowed_books.join(", ")
        };
        writeln!(
            out,
            "ID: {} | Name: {} | Email: {}",
            member.member_id, member.name, member.email
        )?;
        writeln!(out, "  Borrowed Books (ISBNs): [{}]", borrowed)?;
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}
