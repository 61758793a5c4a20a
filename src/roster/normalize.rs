//! # Field Normalization
//!
//! Names are capitalized (first letter upper, rest lower) and major codes are
//! upper-cased. Two behaviours are available:
//!
//! - [`CaseMode::Legacy`] reproduces the historical ASCII arithmetic exactly:
//!   the first character is shifted down by 32 when its code point is above 90,
//!   every later character is shifted up by 32 when its code point is below 90.
//!   This only gives the expected result for purely alphabetic ASCII input;
//!   digits, punctuation and a trailing `Z` come out differently than a reader
//!   would expect (`"o'brien"` becomes `"OGbrien"`).
//! - [`CaseMode::Title`] classifies characters and only re-cases ASCII letters.
//!
//! Characters outside ASCII are never touched in either mode.

use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CASE_SHIFT: u8 = 32;
const UPPER_BOUND: u8 = b'Z';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Legacy,
    Title,
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Legacy => write!(f, "legacy"),
            CaseMode::Title => write!(f, "title"),
        }
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(CaseMode::Legacy),
            "title" => Ok(CaseMode::Title),
            other => Err(format!(
                "Unknown casing mode: {} (expected legacy or title)",
                other
            )),
        }
    }
}

pub fn fix_name(name: &str, mode: CaseMode) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| match mode {
            CaseMode::Legacy => legacy_name_char(i, c),
            CaseMode::Title if i == 0 => c.to_ascii_uppercase(),
            CaseMode::Title => c.to_ascii_lowercase(),
        })
        .collect()
}

pub fn fix_major(major: &str, mode: CaseMode) -> String {
    major
        .chars()
        .map(|c| match mode {
            CaseMode::Legacy => shift_down(c),
            CaseMode::Title => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Normalizes both names and the major of a record in place.
pub fn normalize_record(record: &mut Record, mode: CaseMode) {
    record.first_name = fix_name(&record.first_name, mode);
    record.last_name = fix_name(&record.last_name, mode);
    record.major = fix_major(&record.major, mode);
}

fn legacy_name_char(position: usize, c: char) -> char {
    if position == 0 {
        shift_down(c)
    } else {
        shift_up(c)
    }
}

fn shift_down(c: char) -> char {
    if c.is_ascii() && (c as u8) > UPPER_BOUND {
        (c as u8 - CASE_SHIFT) as char
    } else {
        c
    }
}

fn shift_up(c: char) -> char {
    if c.is_ascii() && (c as u8) < UPPER_BOUND {
        (c as u8 + CASE_SHIFT) as char
    } else {
        c
    }
}
