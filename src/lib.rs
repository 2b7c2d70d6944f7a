//! Mini Library
//!
//! An interactive command-line tool keeping an in-memory catalog of books
//! and members for a small library: add, update, delete, search, borrow and
//! return.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
