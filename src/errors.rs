//! Error types for loading a puzzle, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E011) for documentation lookup:
//!
//! - E001: `Io` (Input could not be opened or read)
//! - E002: `Alloc` (Memory for the input could not be reserved)
//! - E003: `Header` (Header numbers missing or malformed)
//! - E004: `MapTooLarge` (Grid dimension above the limit)
//! - E005: `EmptyMap` (Grid dimension of zero)
//! - E006: `TooManyWords` (Word count above the limit)
//! - E007: `MissingWords` (Fewer words than announced)
//! - E008: `InvalidWordChar` (Word with a non-alphanumeric character)
//! - E009: `InvalidMapChar` (Grid with a non-alphanumeric character)
//! - E010: `MapTooLong` (More grid characters than `width*height`)
//! - E011: `MapTooShort` (Fewer grid characters than `width*height`)
//!
//! Errors fall into two classes (see [`ErrorClass`]): I/O and resource failures
//! exit with status 1, malformed or oversized input exits with status 2.
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::{ErrorClass, LoadError};
//! use wordsearch::loader::Puzzle;
//!
//! match Puzzle::parse_from_str("2 2 1 CA-T ABCD") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E008");
//!         assert_eq!(e.class(), ErrorClass::Format);
//!         eprintln!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::collections::TryReserveError;
use std::io;

/// Which exit status an error maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// I/O, resource, usage or internal failure.
    Failure,
    /// Malformed content or a size limit exceeded.
    Format,
}

impl ErrorClass {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorClass::Failure => 1,
            ErrorClass::Format => 2,
        }
    }
}

/// Everything that can go wrong while turning input text into a [`crate::loader::Puzzle`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("Error allocating memory for {what}: {source}")]
    Alloc {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("Format error whilst reading {field}")]
    Header { field: String },

    #[error("Format error: map too large ({width}x{height}, limit: {limit})")]
    MapTooLarge { width: u64, height: u64, limit: usize },

    #[error("Format error: map dimensions must be positive ({width}x{height})")]
    EmptyMap { width: usize, height: usize },

    #[error("Format error: too many words ({count}, limit: {limit})")]
    TooManyWords { count: u64, limit: usize },

    #[error("Format error whilst reading words: expected {expected}, found {found}")]
    MissingWords { expected: usize, found: usize },

    #[error("Format error: word \"{word}\" contains non-alphanumeric character '{}'", .invalid_byte.escape_ascii())]
    InvalidWordChar { word: String, invalid_byte: u8 },

    #[error("Format error: non-alphanumeric character '{}' found in map at cell {offset}", .invalid_byte.escape_ascii())]
    InvalidMapChar { invalid_byte: u8, offset: usize },

    #[error("Format error: map larger than specified ({expected} cells)")]
    MapTooLong { expected: usize },

    #[error("Format error: map smaller than specified (expected {expected} cells, found {found})")]
    MapTooShort { expected: usize, found: usize },
}

impl LoadError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "E001",
            LoadError::Alloc { .. } => "E002",
            LoadError::Header { .. } => "E003",
            LoadError::MapTooLarge { .. } => "E004",
            LoadError::EmptyMap { .. } => "E005",
            LoadError::TooManyWords { .. } => "E006",
            LoadError::MissingWords { .. } => "E007",
            LoadError::InvalidWordChar { .. } => "E008",
            LoadError::InvalidMapChar { .. } => "E009",
            LoadError::MapTooLong { .. } => "E010",
            LoadError::MapTooShort { .. } => "E011",
        }
    }

    /// Exit-status class of this error
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            LoadError::Io { .. } | LoadError::Alloc { .. } => ErrorClass::Failure,
            _ => ErrorClass::Format,
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "Input could not be opened or read",
            LoadError::Alloc { .. } => "Memory for the input could not be reserved",
            LoadError::Header { .. } => "Header numbers missing or malformed",
            LoadError::MapTooLarge { .. } => "Grid dimension above the limit",
            LoadError::EmptyMap { .. } => "Grid dimension of zero",
            LoadError::TooManyWords { .. } => "Word count above the limit",
            LoadError::MissingWords { .. } => "Fewer words than announced",
            LoadError::InvalidWordChar { .. } => "Word with a non-alphanumeric character",
            LoadError::InvalidMapChar { .. } => "Grid with a non-alphanumeric character",
            LoadError::MapTooLong { .. } => "More grid characters than width*height",
            LoadError::MapTooShort { .. } => "Fewer grid characters than width*height",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            LoadError::Io { .. } => "The input file could not be opened, or reading from it (or from standard input) failed part-way.",
            LoadError::Alloc { .. } => "Reserving the buffer for the grid, the word list, a single word or an input token failed. Nothing was searched.",
            LoadError::Header { .. } => "The input must start with three non-negative integers: grid width, grid height and word count.",
            LoadError::MapTooLarge { .. } => "Grid width and height are each limited to 1023 cells.",
            LoadError::EmptyMap { .. } => "A grid needs at least one row and one column.",
            LoadError::TooManyWords { .. } => "The word list is limited to 1023*1023 entries.",
            LoadError::MissingWords { .. } => "The input ended before the announced number of words was read.",
            LoadError::InvalidWordChar { .. } => "Words may only contain the ASCII letters A-Z (either case) and the digits 0-9.",
            LoadError::InvalidMapChar { .. } => "Grid tokens may only contain the ASCII letters A-Z (either case) and the digits 0-9.",
            LoadError::MapTooLong { .. } => "The grid tokens, concatenated, hold more characters than width*height.",
            LoadError::MapTooShort { .. } => "The input ended before width*height grid characters were read.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LoadError::Header { .. } => Some("Example header: '4 1 1' for a 4x1 grid and one word"),
            LoadError::MapTooLarge { .. } => Some("Split the puzzle into grids of at most 1023x1023"),
            LoadError::EmptyMap { .. } => Some("Width and height must both be at least 1"),
            LoadError::MissingWords { .. } => Some("Check that the word count in the header matches the words listed"),
            LoadError::InvalidWordChar { .. } | LoadError::InvalidMapChar { .. } => {
                Some("Remove punctuation, hyphens and accented letters from the input")
            }
            LoadError::MapTooLong { .. } | LoadError::MapTooShort { .. } => {
                Some("The grid rows must contain exactly width*height characters in total")
            }
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
