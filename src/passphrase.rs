//! Passphrase hardening: quota-driven injection of missing character
//! classes into free-form text.

use rand::Rng;
use rand::rngs::OsRng;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::leet;

const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Each injected character class must reach `length / QUOTA_DIVISOR`,
/// with a floor of one.
const QUOTA_DIVISOR: usize = 8;

/// Hardens a passphrase using the operating system RNG.
pub fn harden(passphrase: &str) -> Zeroizing<String> {
    harden_with_rng(passphrase, &mut OsRng)
}

/// Hardens a passphrase with a caller-supplied randomness source.
///
/// The input is normalized (NFC, spaces to hyphens, hyphen runs collapsed),
/// then uppercase letters, digits and special characters are injected until
/// each class meets its quota. Injection rewrites eligible positions in
/// place first, each position at most once, and appends fresh characters
/// only when the eligible positions run out; the special-character deficit
/// is always appended as hyphens. Never fails, for any input.
pub fn harden_with_rng<R: Rng>(passphrase: &str, rng: &mut R) -> Zeroizing<String> {
    let mut chars: Vec<char> = normalize(passphrase).chars().collect();

    let counts = classify(&chars);
    let quota = (chars.len() / QUOTA_DIVISOR).max(1);

    inject_uppercase(
        &mut chars,
        quota.saturating_sub(counts.uppercase),
        counts.lowercase_positions,
        rng,
    );
    inject_digits(&mut chars, quota.saturating_sub(counts.digits), rng);
    for _ in 0..quota.saturating_sub(counts.specials) {
        chars.push('-');
    }

    Zeroizing::new(chars.into_iter().collect())
}

/// NFC-normalizes the input, replaces every space with a hyphen, then
/// collapses runs of consecutive hyphens into one.
fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_hyphen = false;

    for c in input.nfc() {
        let c = if c == ' ' { '-' } else { c };
        if c == '-' {
            if !previous_hyphen {
                out.push(c);
            }
            previous_hyphen = true;
        } else {
            out.push(c);
            previous_hyphen = false;
        }
    }

    out
}

struct ClassCounts {
    /// Positions of lowercase letters, kept as a list because uppercase
    /// injection samples them without replacement.
    lowercase_positions: Vec<usize>,
    uppercase: usize,
    digits: usize,
    specials: usize,
}

/// Sorts every code point into exactly one bucket.
fn classify(chars: &[char]) -> ClassCounts {
    let mut counts = ClassCounts {
        lowercase_positions: Vec::new(),
        uppercase: 0,
        digits: 0,
        specials: 0,
    };

    for (i, &c) in chars.iter().enumerate() {
        if c.is_lowercase() {
            counts.lowercase_positions.push(i);
        } else if c.is_uppercase() {
            counts.uppercase += 1;
        } else if c.is_numeric() {
            counts.digits += 1;
        } else {
            counts.specials += 1;
        }
    }

    counts
}

/// Uppercases `deficit` randomly chosen lowercase positions, then appends
/// random uppercase letters for whatever the positions could not cover.
fn inject_uppercase<R: Rng>(
    chars: &mut Vec<char>,
    deficit: usize,
    mut positions: Vec<usize>,
    rng: &mut R,
) {
    let mut remaining = deficit;

    while remaining > 0 && !positions.is_empty() {
        let index = rng.gen_range(0..positions.len());
        let position = positions.swap_remove(index);
        chars[position] = leet::to_upper(chars[position]);
        remaining -= 1;
    }

    for _ in 0..remaining {
        chars.push(UPPERCASE[rng.gen_range(0..UPPERCASE.len())]);
    }
}

/// Leet-substitutes `deficit` randomly chosen eligible positions, then
/// appends random digits for whatever the positions could not cover.
/// Eligible positions are discovered after uppercase injection: a letter
/// that was just uppercased is no longer a leet candidate.
fn inject_digits<R: Rng>(chars: &mut Vec<char>, deficit: usize, rng: &mut R) {
    let mut positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| leet::is_leetable(**c))
        .map(|(i, _)| i)
        .collect();

    let mut remaining = deficit;

    while remaining > 0 && !positions.is_empty() {
        let index = rng.gen_range(0..positions.len());
        let position = positions.swap_remove(index);
        chars[position] = leet::to_leet(chars[position]);
        remaining -= 1;
    }

    for _ in 0..remaining {
        chars.push(DIGITS[rng.gen_range(0..DIGITS.len())]);
    }
}
