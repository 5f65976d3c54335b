// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

#[derive(Debug)]
pub enum MutalignError {
    Io(io::Error),
    Format(String),
    // Symbol outside {A, C, G, T, N}; position is 0-based in the source text.
    InvalidSequence { symbol: char, position: usize },
    Json(serde_json::Error),
}

// These allow conversion to MutalignError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for MutalignError {
    fn from(e: io::Error) -> Self {
        MutalignError::Io(e)
    }
}

impl From<String> for MutalignError {
    fn from(s: String) -> Self {
        MutalignError::Format(s)
    }
}

impl From<serde_json::Error> for MutalignError {
    fn from(e: serde_json::Error) -> Self {
        MutalignError::Json(e)
    }
}

impl From<regex::Error> for MutalignError {
    fn from(e: regex::Error) -> Self {
        MutalignError::Format(format!("Malformed regex {}", e))
    }
}

impl fmt::Display for MutalignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutalignError::Io(e) => write!(f, "I/O error: {}", e),
            MutalignError::Format(msg) => write!(f, "Format error: {}", msg),
            MutalignError::InvalidSequence { symbol, position } => write!(
                f,
                "Invalid sequence: symbol '{}' at position {} is not one of A, C, G, T, N",
                symbol.escape_default(),
                position
            ),
            MutalignError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for MutalignError {}
