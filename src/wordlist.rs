//! Word sources: the bundled English dictionary and a synthetic generator.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use rand::Rng;

use crate::error::{Error, Result};
use crate::options::Options;

const WORDLIST_DATA: &str = include_str!("../assets/words_en.txt");

#[cfg(test)]
const EXPECTED_SHA256: &str = "e337de05738559769989ebe17430dec4111de28e0d1cbd357140058d05c47b26";

static WORDLIST: OnceLock<Vec<&'static str>> = OnceLock::new();

/// English vowels.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// English consonants.
const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Bundled English word list: lowercase ASCII, one word per line. Lines
/// holding anything else are dropped at load time.
pub fn get_wordlist() -> &'static [&'static str] {
    WORDLIST.get_or_init(|| {
        WORDLIST_DATA
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
            .collect()
    })
}

/// Picks `word_count` dictionary words within the configured length bounds.
///
/// Selection is bucketed: a length is chosen uniformly among the distinct
/// lengths present, then a word uniformly within that bucket. Words in
/// sparse length buckets are therefore more likely than a flat draw over
/// all qualifying words would make them.
pub(crate) fn dictionary_words<R: Rng>(opt: &Options, rng: &mut R) -> Result<Vec<Vec<char>>> {
    let buckets = length_buckets(opt.min_word_length, opt.max_word_length);
    if buckets.is_empty() {
        return Err(Error::NoWordsInRange {
            min: opt.min_word_length,
            max: opt.max_word_length,
        });
    }

    let mut words = Vec::with_capacity(opt.word_count);
    for _ in 0..opt.word_count {
        let bucket = &buckets[rng.gen_range(0..buckets.len())];
        let word = bucket[rng.gen_range(0..bucket.len())];
        words.push(word.chars().collect());
    }

    Ok(words)
}

fn length_buckets(min: usize, max: usize) -> Vec<Vec<&'static str>> {
    let mut by_length: BTreeMap<usize, Vec<&'static str>> = BTreeMap::new();

    for word in get_wordlist() {
        let length = word.len();
        if length >= min && length <= max {
            by_length.entry(length).or_default().push(word);
        }
    }

    by_length.into_values().collect()
}

/// Generates `word_count` pronounceable synthetic words by alternating
/// consonant and vowel draws, each with a length uniform within the
/// configured bounds.
pub(crate) fn random_words<R: Rng>(opt: &Options, rng: &mut R) -> Vec<Vec<char>> {
    (0..opt.word_count)
        .map(|_| {
            let length = rng.gen_range(opt.min_word_length..=opt.max_word_length);
            (0..length)
                .map(|i| {
                    if i % 2 == 0 {
                        CONSONANTS[rng.gen_range(0..CONSONANTS.len())]
                    } else {
                        VOWELS[rng.gen_range(0..VOWELS.len())]
                    }
                })
                .collect()
        })
        .collect()
}
