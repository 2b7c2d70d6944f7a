//! Borrow and return actions

use std::io::{BufRead, Write};

use crate::{error::AppResult, services::Services};

use super::console::Console;

pub fn borrow_book<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let member_id = console.prompt("Enter Member ID: ")?;
    let isbn = console.prompt("Enter Book ISBN to borrow: ")?;
    services.loans().borrow_book(&member_id, &isbn)?;
    writeln!(console.out(), "📥 Book borrowed successfully!")?;
    Ok(())
}

pub fn return_book<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let member_id = console.prompt("Enter Member ID: ")?;
    let isbn = console.prompt("Enter Book ISBN to return: ")?;
    services.loans().return_book(&member_id, &isbn)?;
    writeln!(console.out(), "📤 Book returned successfully!")?;
    Ok(())
}
