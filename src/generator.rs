//! Password assembly and the public generation entry points.

use rand::Rng;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::entropy;
use crate::error::Result;
use crate::options::{Options, SepRule, WordSource};
use crate::passphrase;
use crate::rules;
use crate::wordlist;

/// Generates a password from the given options using the operating system
/// RNG, returning it together with its estimated entropy in bits.
pub fn generate(options: &Options) -> Result<(Zeroizing<String>, f64)> {
    generate_with_rng(options, &mut OsRng)
}

/// Generates a password with a caller-supplied randomness source.
///
/// Options are validated on a private copy, so the caller's value is never
/// mutated. When the options carry a passphrase the word pipeline is
/// skipped entirely and the passphrase is hardened instead.
pub fn generate_with_rng<R: Rng>(
    options: &Options,
    rng: &mut R,
) -> Result<(Zeroizing<String>, f64)> {
    let mut opt = options.clone();
    opt.validate()?;

    let password = match &opt.passphrase {
        Some(passphrase) => passphrase::harden_with_rng(passphrase, rng),
        None => assemble(&opt, rng)?,
    };

    let bits = entropy::estimate(&opt, password.chars().count());

    Ok((password, bits))
}

/// Sources words, runs each through the rule pipeline, then joins and pads.
///
/// Assembly is two-pass: the total length is computed first (word lengths
/// plus one separator code point per gap), the output buffer is allocated
/// once, and words plus separators are copied in. When a target padded
/// length exceeds the total, the shortfall is appended at the end only,
/// never interleaved.
fn assemble<R: Rng>(opt: &Options, rng: &mut R) -> Result<Zeroizing<String>> {
    let raw = match opt.source {
        WordSource::Dictionary => wordlist::dictionary_words(opt, rng)?,
        WordSource::Random => wordlist::random_words(opt, rng),
    };

    let words: Vec<Vec<char>> = raw
        .iter()
        .enumerate()
        .map(|(i, word)| rules::transform_word(word, i, opt, rng))
        .collect();

    // The separator is one code point, drawn once per password when it
    // comes from a pool.
    let separator = match opt.sep_rule {
        SepRule::None => None,
        SepRule::Fixed => opt.separator,
        SepRule::Random => rules::draw_from(&opt.separator_pool, 1, rng).pop(),
    };

    let mut size: usize = words.iter().map(Vec::len).sum();
    if separator.is_some() {
        size += words.len().saturating_sub(1);
    }
    let shortfall = opt.pad_length.saturating_sub(size);

    let mut password: Vec<char> = Vec::with_capacity(size + shortfall);
    for (i, word) in words.iter().enumerate() {
        password.extend_from_slice(word);
        if let Some(sep) = separator
            && i + 1 < words.len()
        {
            password.push(sep);
        }
    }

    if shortfall > 0 {
        password = rules::pad_word(&password, 0, shortfall, &opt.symbol_pool, opt.pad_symbol, rng);
    }

    Ok(Zeroizing::new(password.into_iter().collect()))
}
