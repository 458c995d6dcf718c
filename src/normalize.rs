//! Query normalization.
//!
//! Every query goes through [`normalize`] before it is encoded, and the
//! resolver compares the normalized query against lowercased record names.
//! The steps are:
//!
//! 1. lowercase
//! 2. delete spaces and underscores (`"Ad d_Node"` -> `"addnode"`)
//! 3. spell out every run of decimal digits in English (`"node7"` -> `"nodeseven"`),
//!    including non-ASCII digits such as `"٧"`
//!
//! Spelled-out numbers have their spaces removed as well, so the output never
//! contains a space, an underscore, an uppercase letter, or a digit and
//! normalizing twice is the same as normalizing once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{SearchError, SearchResult};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit regex"));
static DECIMAL_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").expect("valid digit regex"));

const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale group names, indexed by power of one thousand.
const SCALES: [&str; 13] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

/// Normalize a free-text query for phonetic encoding.
pub fn normalize(text: &str) -> SearchResult<String> {
    let compact: String = text
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '_')
        .collect();

    expand_numbers(&compact)
}

/// Replace each maximal digit run with its English words, spaces removed.
pub fn expand_numbers(text: &str) -> SearchResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in DIGIT_RUN.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let ascii: String = m
            .as_str()
            .chars()
            .filter_map(digit_value)
            .filter_map(|d| char::from_digit(d, 10))
            .collect();
        let words = number_to_words(&ascii)?;
        out.extend(words.chars().filter(|c| *c != ' '));
        last = m.end();
    }
    out.push_str(&text[last..]);

    Ok(out)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit (`'7'`, `'٧'`, `'७'`).
///
/// Decimal digits are encoded in contiguous runs of ten starting at zero, so
/// the value is the offset from the start of the run.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Spell out a string of ASCII digits as an English cardinal.
///
/// `"121"` -> `"one hundred and twenty-one"`,
/// `"1234"` -> `"one thousand, two hundred and thirty-four"`. Groups are
/// separated by a comma, except that a final group under one hundred is
/// joined with "and". Leading zeros are ignored.
pub fn number_to_words(digits: &str) -> SearchResult<String> {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return if digits.is_empty() {
            Err(SearchError::NumberTooLarge(String::new()))
        } else {
            Ok(UNITS[0].to_string())
        };
    }

    let mut value: u128 = trimmed
        .parse()
        .map_err(|_| SearchError::NumberTooLarge(digits.to_string()))?;

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    if groups.len() > SCALES.len() {
        return Err(SearchError::NumberTooLarge(digits.to_string()));
    }

    let mut out = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push_str(if scale == 0 && group < 100 { " and " } else { ", " });
        }
        out.push_str(&hundreds_to_words(group));
        if scale > 0 {
            out.push(' ');
            out.push_str(SCALES[scale]);
        }
    }

    Ok(out)
}

fn hundreds_to_words(n: u16) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    match (hundreds, rest) {
        (0, r) => tens_to_words(r),
        (h, 0) => format!("{} hundred", UNITS[h as usize]),
        (h, r) => format!("{} hundred and {}", UNITS[h as usize], tens_to_words(r)),
    }
}

fn tens_to_words(n: u16) -> String {
    let n = n as usize;
    if n < 20 {
        return UNITS[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        unit => format!("{}-{}", TENS[n / 10], UNITS[unit]),
    }
}
