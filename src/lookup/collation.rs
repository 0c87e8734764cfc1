//! Locale-style ordering for hero names.
//!
//! Approximates the default collation of `localeCompare`: letters compare
//! without regard to case or Latin accents first, then accents, then case
//! with lowercase first. Thai leading vowels (เ แ โ ใ ไ) are ordered by
//! the consonant written after them, as Thai dictionaries do.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block. Marks outside it (Thai vowel signs,
/// tone marks) carry primary weight and are kept.
fn is_latin_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_thai_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

fn is_thai_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

/// Move each Thai leading vowel after the consonant that follows it.
fn reorder_thai(chars: impl Iterator<Item = char>) -> String {
    let chars: Vec<char> = chars.collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars.get(i + 1) {
            Some(&next) if is_thai_leading_vowel(chars[i]) && is_thai_consonant(next) => {
                out.push(next);
                out.push(chars[i]);
                i += 2;
            }
            _ => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

fn primary_key(s: &str) -> String {
    reorder_thai(
        s.nfkd()
            .filter(|c| !is_latin_diacritic(*c))
            .flat_map(char::to_lowercase),
    )
}

fn secondary_key(s: &str) -> String {
    reorder_thai(s.nfkd().flat_map(char::to_lowercase))
}

/// Lowercase before uppercase at the first differing case.
fn compare_case(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfkd().zip(b.nfkd()) {
        match (ca.is_uppercase(), cb.is_uppercase()) {
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

/// Compare two names the way a reader expects an alphabetical list to run.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}
