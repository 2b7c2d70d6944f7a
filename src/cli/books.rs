//! Book menu actions

use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::book::{CreateBook, UpdateBook},
    services::Services,
};

use super::console::Console;

pub fn add_book<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let isbn = console.prompt("Enter ISBN: ")?;
    let title = console.prompt("Enter Title: ")?;
    let author = console.prompt("Enter Author: ")?;
    writeln!(
        console.out(),
        "Available genres: {}",
        services.catalog().genres().join(", ")
    )?;
    let genre = console.prompt("Enter Genre: ")?;
    let total_copies = console.prompt_u32("Enter Total Copies: ", 0)?;

    services.catalog().add_book(CreateBook {
        isbn,
        title,
        author,
        genre,
        total_copies,
    })?;
    writeln!(console.out(), "✅ Book added successfully!")?;
    Ok(())
}

pub fn search_books<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let query = console.prompt("Enter title or author to search: ")?;
    let results = services.catalog().search_books(&query);

    let out = console.out();
    if results.is_empty() {
        writeln!(out, "❌ No books found.")?;
        return Ok(());
    }
    writeln!(out, "\n🔍 Found {} book(s):", results.len())?;
    for book in results {
        writeln!(out, "  - {} by {} (ISBN: {})", book.title, book.author, book.isbn)?;
    }
    Ok(())
}

pub fn update_book<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let isbn = console.prompt("Enter ISBN of book to update: ")?;
    let current = match services.catalog().get_book(&isbn) {
        Ok(book) => book,
        Err(_) => {
            writeln!(console.out(), "❌ Book not found.")?;
            return Ok(());
        }
    };

    writeln!(console.out(), "Leave blank to keep current value.")?;
    let title = console.prompt_optional(&format!("New Title (current: {}): ", current.title))?;
    let author = console.prompt_optional(&format!("New Author (current: {}): ", current.author))?;
    writeln!(console.out(), "Genres: {}", services.catalog().genres().join(", "))?;
    let genre = console.prompt_optional(&format!("New Genre (current: {}): ", current.genre))?;
    // Anything that is not a plain run of digits keeps the current count
    let total_copies = Some(console.prompt(&format!(
        "New Total Copies (current: {}): ",
        current.total_copies
    ))?)
    .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
    .and_then(|s| s.parse::<u32>().ok());

    services.catalog().update_book(
        &current.isbn,
        UpdateBook {
            title,
            author,
            genre,
            total_copies,
        },
    )?;
    writeln!(console.out(), "✏️  Book updated successfully!")?;
    Ok(())
}

pub fn delete_book<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let isbn = console.prompt("Enter ISBN of book to delete: ")?;
    services.catalog().delete_book(&isbn)?;
    writeln!(console.out(), "🗑️  Book deleted successfully!")?;
    Ok(())
}

pub fn view_books<R: BufRead, W: Write>(
    services: &mut Services,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let books = services.catalog().list_books();

    let out = console.out();
    if books.is_empty() {
        writeln!(out, "\n📚 No books in the library.")?;
        return Ok(());
    }
    let rule = "-".repeat(80);
    writeln!(out, "\n📚 Library Books:")?;
    writeln!(out, "{}", rule)?;
    for entry in books {
        let book = &entry.book;
        writeln!(out, "ISBN: {}", book.isbn)?;
        writeln!(out, "  Title: {}", book.title)?;
        writeln!(out, "  Author: {}", book.author)?;
        writeln!(out, "  Genre: {}", book.genre)?;
        writeln!(out, "  Copies: {} (Available: {})", book.total_copies, entry.available)?;
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}
