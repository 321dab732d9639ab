//! Text normalization for scraped post bodies
//!
//! Decodes HTML character references and tidies whitespace so the entity
//! recognizer sees the text a reader would. Named references use the full
//! HTML5 table, including the legacy forms written without a semicolon.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref ENTITY_REGEX: Regex = Regex::new(
        r"&(?:#(?:([0-9]+)|[xX]([0-9a-fA-F]+));?|([A-Za-z][A-Za-z0-9]{0,31};?))"
    )
    .unwrap();
    static ref SPACE_RUN_REGEX: Regex = Regex::new(r" {2,}").unwrap();
    static ref NEWLINE_RUN_REGEX: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Code points 0x80..=0x9F as browsers read them: Windows-1252, except the
/// five positions that encoding leaves undefined.
const WINDOWS_1252: [char; 32] = [
    '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}', '\u{17d}', '\u{8f}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}', '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
];

/// Decode, collapse whitespace, and trim. Absent text yields an empty string.
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let decoded = decode_entities(text);
    let spaced = SPACE_RUN_REGEX.replace_all(&decoded, " ");
    let paragraphs = NEWLINE_RUN_REGEX.replace_all(&spaced, "\n\n");
    paragraphs.trim().to_string()
}

/// Decode numeric and named character references in one pass.
///
/// Unknown names are left as written. Decoding never fails: out-of-range
/// numbers become U+FFFD and disallowed control points are dropped.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_REGEX.replace_all(text, |caps: &Captures| {
        if let Some(name) = caps.get(3) {
            return named_reference(name.as_str());
        }
        let decoded = match (caps.get(1), caps.get(2)) {
            (Some(decimal), _) => decode_numeric(decimal.as_str(), 10),
            (_, Some(hex)) => decode_numeric(hex.as_str(), 16),
            _ => return caps[0].to_string(),
        };
        decoded.map(String::from).unwrap_or_default()
    })
}

fn named_reference(name: &str) -> String {
    // Only the one reference is handed over, so output is never decoded twice
    htmlize::unescape(format!("&{name}")).into_owned()
}

fn decode_numeric(digits: &str, radix: u32) -> Option<char> {
    // Too many digits for u32 is out of range like any other huge number
    let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);

    match code {
        0 | 0xD800..=0xDFFF | 0x110000..=u32::MAX => Some(char::REPLACEMENT_CHARACTER),
        0x0D => Some('\r'),
        0x80..=0x9F => Some(WINDOWS_1252[(code - 0x80) as usize]),
        code if is_disallowed(code) => None,
        code => Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)),
    }
}

/// Control characters and noncharacters a reference may not produce
fn is_disallowed(code: u32) -> bool {
    matches!(code, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF)
        || code & 0xFFFE == 0xFFFE
}
