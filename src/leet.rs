//! Leet ("1337") substitution table and single code point transforms.

/// Visually similar letter-to-digit substitutions. Digits never map back,
/// so applying the substitution twice is a no-op.
const LEET_TABLE: [(char, char); 6] = [
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Returns true when `c` is a lowercase letter with a digit stand-in.
pub fn is_leetable(c: char) -> bool {
    c.is_lowercase() && LEET_TABLE.iter().any(|&(from, _)| from == c)
}

/// Substitutes `c` with its digit stand-in, case-insensitively, or returns
/// it unchanged. Never fails.
pub fn to_leet(c: char) -> char {
    LEET_TABLE
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(&c))
        .map(|&(_, to)| to)
        .unwrap_or(c)
}

/// Uppercases a single code point. Mappings that expand to several code
/// points keep only the first, so the output length never changes.
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}
