//! Line-oriented rendering of search results
//!
//! One line per candidate: the hex seed, then `OK` or `BAD <error>`. The start
//! seed's row is highlighted with a blue background when colour is on, or
//! tagged with `(start)` otherwise.

use std::io::{self, Write};

use crate::search::Candidate;

const BG_BLUE: &str = "\x1b[44m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Placeholder printed for offsets that fell below zero
const NO_SEED: &str = "-";

/// Renders candidates as text
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    color: bool,
}

impl Reporter {
    /// Create a reporter, with or without ANSI colours
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render one candidate without a trailing newline
    pub fn format_line(&self, candidate: &Candidate) -> String {
        let seed = candidate
            .seed
            .as_ref()
            .map(|s| s.to_hex())
            .unwrap_or_else(|| NO_SEED.to_string());
        let body = match &candidate.outcome {
            Ok(_) => format!("{} OK", seed),
            Err(e) => format!("{} BAD {}", seed, e),
        };

        if !self.color {
            return if candidate.is_center() {
                format!("{} (start)", body)
            } else {
                body
            };
        }

        let background = if candidate.is_center() { BG_BLUE } else { "" };
        let foreground = if candidate.is_ok() { FG_GREEN } else { FG_RED };
        format!("{}{}{}{}", background, foreground, body, RESET)
    }

    /// Write every candidate, one per line
    pub fn write_all<W: Write>(&self, out: &mut W, candidates: &[Candidate]) -> io::Result<()> {
        for candidate in candidates {
            writeln!(out, "{}", self.format_line(candidate))?;
        }
        out.flush()
    }
}
