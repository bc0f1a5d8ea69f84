//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `LoadError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use wordsearch::errors::LoadError;

/// One sample of every `LoadError` variant, in code order
fn all_load_error_variants() -> Vec<LoadError> {
    // TryReserveError has no public constructor; provoke one
    let alloc_failure = Vec::<u8>::new()
        .try_reserve_exact(usize::MAX)
        .expect_err("reserving usize::MAX bytes cannot succeed");

    vec![
        LoadError::Io {
            origin: "map file 'grid.txt'".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        LoadError::Alloc { what: "map", source: alloc_failure },
        LoadError::Header { field: "map size".to_string() },
        LoadError::MapTooLarge { width: 1025, height: 10, limit: 1023 },
        LoadError::EmptyMap { width: 0, height: 10 },
        LoadError::TooManyWords { count: 2_000_000, limit: 1023 * 1023 },
        LoadError::MissingWords { expected: 5, found: 3 },
        LoadError::InvalidWordChar { word: "CA-T".to_string(), invalid_byte: b'-' },
        LoadError::InvalidMapChar { invalid_byte: b'!', offset: 17 },
        LoadError::MapTooLong { expected: 16 },
        LoadError::MapTooShort { expected: 16, found: 12 },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Exit Status\n");
    println!("| Status | Meaning |");
    println!("|--------|---------|");
    println!("| 0 | Success |");
    println!("| 1 | I/O, allocation, usage or output failure |");
    println!("| 2 | Malformed input or size limit exceeded |\n");

    println!("## Load Errors\n");
    println!("Errors raised while reading and validating the puzzle input. Nothing is searched when one occurs.\n");

    for error in all_load_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Exit status:** {}\n", error.class().exit_code());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Detailed format:**");
        println!("```");
        println!("Error: {}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}
