//! Interactive menu loop

pub mod books;
pub mod console;
pub mod loans;
pub mod members;

use std::io::{BufRead, Write};

use crate::{error::AppResult, services::Services};

use console::{is_end_of_input, is_unreadable_line, Console};

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit = 0,
    AddBook = 1,
    AddMember = 2,
    SearchBooks = 3,
    BorrowBook = 4,
    ReturnBook = 5,
    UpdateBook = 6,
    UpdateMember = 7,
    DeleteBook = 8,
    DeleteMember = 9,
    ViewBooks = 10,
    ViewMembers = 11,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddBook,
        MenuChoice::AddMember,
        MenuChoice::SearchBooks,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::UpdateBook,
        MenuChoice::UpdateMember,
        MenuChoice::DeleteBook,
        MenuChoice::DeleteMember,
        MenuChoice::ViewBooks,
        MenuChoice::ViewMembers,
        MenuChoice::Exit,
    ];
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(MenuChoice::Exit),
            "1" => Ok(MenuChoice::AddBook),
            "2" => Ok(MenuChoice::AddMember),
            "3" => Ok(MenuChoice::SearchBooks),
            "4" => Ok(MenuChoice::BorrowBook),
            "5" => Ok(MenuChoice::ReturnBook),
            "6" => Ok(MenuChoice::UpdateBook),
            "7" => Ok(MenuChoice::UpdateMember),
            "8" => Ok(MenuChoice::DeleteBook),
            "9" => Ok(MenuChoice::DeleteMember),
            "10" => Ok(MenuChoice::ViewBooks),
            "11" => Ok(MenuChoice::ViewMembers),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::AddBook => "Add Book",
            MenuChoice::AddMember => "Add Member",
            MenuChoice::SearchBooks => "Search Books",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::UpdateBook => "Update Book",
            MenuChoice::UpdateMember => "Update Member",
            MenuChoice::DeleteBook => "Delete Book",
            MenuChoice::DeleteMember => "Delete Member",
            MenuChoice::ViewBooks => "View All Books",
            MenuChoice::ViewMembers => "View All Members",
        };
        write!(f, "{}. {}", *self as u8, label)
    }
}

/// Run the menu until the user exits or input ends.
///
/// Operation errors and undecodable input lines are reported to the user
/// and the loop continues; only other I/O failures are returned.
pub fn run<R: BufRead, W: Write>(services: &mut Services, input: R, output: W) -> AppResult<()> {
    let mut console = Console::new(input, output);
    let banner = "=".repeat(50);

    writeln!(
        console.out(),
        "🏛️  Welcome to the {} Management System!",
        services.config().name
    )?;

    loop {
        let out = console.out();
        writeln!(out, "\n{}", banner)?;
        writeln!(out, "Select an option:")?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}", choice)?;
        }
        writeln!(out, "{}", banner)?;

        let answer = match console.prompt("Enter your choice (0-11): ") {
            Ok(answer) => answer,
            Err(e) if is_end_of_input(&e) => break,
            Err(e) if is_unreadable_line(&e) => {
                tracing::warn!("Unreadable menu answer: {}", e);
                writeln!(console.out(), "⚠️  Error: {}", e)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let choice = match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => choice,
            Err(_) => {
                writeln!(
                    console.out(),
                    "❌ Invalid choice. Please enter a number between 0 and 11."
                )?;
                continue;
            }
        };

        tracing::debug!(?choice, "Menu selection");
        match dispatch(choice, services, &mut console) {
            Ok(()) => {}
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => {
                tracing::warn!("{} failed: {}", choice, e);
                writeln!(console.out(), "⚠️  Error: {}", e)?;
            }
        }
    }

    writeln!(
        console.out(),
        "👋 Thank you for using the Library System. Goodbye!"
    )?;
    console.out().flush()?;
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    match choice {
        MenuChoice::AddBook => books::add_book(services, console),
        MenuChoice::AddMember => members::add_member(services, console),
        MenuChoice::SearchBooks => books::search_books(services, console),
        MenuChoice::BorrowBook => loans::borrow_book(services, console),
        MenuChoice::ReturnBook => loans::return_book(services, console),
        MenuChoice::UpdateBook => books::update_book(services, console),
        MenuChoice::UpdateMember => members::update_member(services, console),
        MenuChoice::DeleteBook => books::delete_book(services, console),
        MenuChoice::DeleteMember => members::delete_member(services, console),
        MenuChoice::ViewBooks => books::view_books(services, console),
        MenuChoice::ViewMembers => members::view_members(services, console),
        MenuChoice::Exit => Ok(()),
    }
}
