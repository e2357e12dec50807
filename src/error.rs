//! Error types for the pagedoc library.

use std::io;
use thiserror::Error;

/// Result type alias for pagedoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the content core.
///
/// The content transforms themselves (extraction, wrapping, rendering) are
/// total and never produce these; errors come from the page stores, the
/// save path, and batch export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing a store file or export output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A store file could not be decoded as JSON.
    #[error("Store file decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// No page exists for the given slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// A page with the given slug already exists.
    #[error("A page with slug '{0}' already exists")]
    DuplicateSlug(String),

    /// A usable slug could not be derived for a new page.
    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    /// Store-level failure with message, for use by custom store backends.
    #[error("Store error: {0}")]
    Store(String),
}
