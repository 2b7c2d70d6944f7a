//! Menu loop tests: scripted input in, captured output back

use mini_library::{cli, config::LibraryConfig, repository::Repository, services::Services};

fn new_services() -> Services {
    Services::new(Repository::new(), LibraryConfig::default())
}

/// Feed `lines` to the menu and return everything it printed
fn run_script(services: &mut Services, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    let mut output = Vec::new();
    cli::run(services, input.as_bytes(), &mut output).expect("menu loop failed");
    String::from_utf8(output).expect("output is not UTF-8")
}

const ADD_DUNE: [&str; 6] = ["1", "978-0-441-17271-9", "Dune", "Frank Herbert", "Fiction", "2"];
const ADD_ADA: [&str; 4] = ["2", "m1", "Ada Lovelace", "ada@example.org"];

fn script(parts: &[&[&'static str]]) -> Vec<&'static str> {
    parts.concat()
}

#[test]
fn test_welcome_and_exit() {
    let mut services = new_services();
    let out = run_script(&mut services, &["0"]);
    assert!(out.contains("Welcome to the Mini Library Management System!"));
    assert!(out.contains("11. View All Members"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut services = new_services();
    let out = run_script(&mut services, &["1", "123"]);
    assert!(out.contains("Goodbye!"));
    assert!(services.catalog().list_books().is_empty());
}

#[test]
fn test_invalid_choice() {
    let mut services = new_services();
    let out = run_script(&mut services, &["42", "0"]);
    assert!(out.contains("❌ Invalid choice. Please enter a number between 0 and 11."));
}

#[test]
fn test_add_and_view_books() {
    let mut services = new_services();
    let lines = script(&[&ADD_DUNE[..], &["10", "0"]]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("Available genres: Fiction, Non-Fiction"));
    assert!(out.contains("✅ Book added successfully!"));
    assert!(out.contains("ISBN: 9780441172719"));
    assert!(out.contains("  Title: Dune"));
    assert!(out.contains("  Copies: 2 (Available: 2)"));
}

#[test]
fn test_copies_prompt_reprompts() {
    let mut services = new_services();
    let out = run_script(
        &mut services,
        &["1", "1", "T", "A", "Fiction", "many", "-3", "1", "0"],
    );
    assert!(out.contains("Please enter a valid number."));
    assert!(out.contains("Value must be at least 0."));
    assert_eq!(services.catalog().list_books()[0].book.total_copies, 1);
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    let mut services = new_services();
    let lines = script(&[&ADD_DUNE[..], &ADD_DUNE[..], &["10", "0"]]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("⚠️  Error: Conflict: A book with ISBN 9780441172719 already exists"));
    assert!(out.contains("📚 Library Books:"));
}

#[test]
fn test_search_output() {
    let mut services = new_services();
    let lines = script(&[&ADD_DUNE[..], &["3", "herbert", "3", "tolkien", "0"]]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("🔍 Found 1 book(s):"));
    assert!(out.contains("  - Dune by Frank Herbert (ISBN: 9780441172719)"));
    assert!(out.contains("❌ No books found."));
}

#[test]
fn test_borrow_return_and_availability() {
    let mut services = new_services();
    let lines = script(&[
        &ADD_DUNE[..],
        &ADD_ADA[..],
        &["4", "m1", "9780441172719"],
        &["10", "11"],
        &["5", "m1", "9780441172719"],
        &["11", "0"],
    ]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("📥 Book borrowed successfully!"));
    assert!(out.contains("  Copies: 2 (Available: 1)"));
    assert!(out.contains("ID: m1 | Name: Ada Lovelace | Email: ada@example.org"));
    assert!(out.contains("  Borrowed Books (ISBNs): [9780441172719]"));
    assert!(out.contains("📤 Book returned successfully!"));
    assert!(out.contains("  Borrowed Books (ISBNs): [None]"));
}

#[test]
fn test_update_book_keeps_blank_fields() {
    let mut services = new_services();
    let lines = script(&[
        &ADD_DUNE[..],
        &["6", "9780441172719", "Dune Messiah", "", "", "x"],
        &["0"],
    ]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("New Title (current: Dune): "));
    assert!(out.contains("✏️  Book updated successfully!"));

    let book = services.catalog().get_book("9780441172719").unwrap();
    assert_eq!(book.title, "Dune Messiah");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.genre, "Fiction");
    assert_eq!(book.total_copies, 2);
}

#[test]
fn test_update_missing_records() {
    let mut services = new_services();
    let out = run_script(&mut services, &["6", "404", "7", "nobody", "0"]);
    assert!(out.contains("❌ Book not found."));
    assert!(out.contains("❌ Member not found."));
}

#[test]
fn test_update_member() {
    let mut services = new_services();
    let lines = script(&[&ADD_ADA[..], &["7", "m1", "", "countess@example.org", "0"]]);
    let out = run_script(&mut services, &lines);
    assert!(out.contains("✏️  Member updated successfully!"));
    let member = services.members().get_member("m1").unwrap();
    assert_eq!(member.name, "Ada Lovelace");
    assert_eq!(member.email, "countess@example.org");
}

#[test]
fn test_delete_refused_while_borrowed() {
    let mut services = new_services();
    let lines = script(&[
        &ADD_DUNE[..],
        &ADD_ADA[..],
        &["4", "m1", "9780441172719"],
        &["8", "9780441172719"],
        &["9", "m1"],
        &["5", "m1", "9780441172719"],
        &["8", "9780441172719"],
        &["9", "m1"],
        &["10", "11", "0"],
    ]);
    let out = run_script(&mut services, &lines);
    assert_eq!(out.matches("⚠️  Error: Business rule violation").count(), 2);
    assert!(out.contains("🗑️  Book deleted successfully!"));
    assert!(out.contains("🗑️  Member deleted successfully!"));
    assert!(out.contains("📚 No books in the library."));
    assert!(out.contains("👥 No members registered."));
}

#[test]
fn test_undecodable_menu_answer_is_reported() {
    let mut services = new_services();
    let input = b"\xff\xfe\n2\nm1\nAda\na@x\n0\n";
    let mut output = Vec::new();
    cli::run(&mut services, &input[..], &mut output).expect("menu loop failed");
    let out = String::from_utf8(output).expect("output is not UTF-8");
    assert!(out.contains("⚠️  Error: I/O error"));
    assert!(out.contains("✅ Member added successfully!"));
    assert_eq!(services.members().list_members().len(), 1);
}

#[test]
fn test_update_book_signed_copies_keep_current() {
    let mut services = new_services();
    let lines = script(&[&ADD_DUNE[..], &["6", "9780441172719", "", "", "", "+5", "0"]]);
    run_script(&mut services, &lines);
    let book = services.catalog().get_book("9780441172719").unwrap();
    assert_eq!(book.total_copies, 2);
}
