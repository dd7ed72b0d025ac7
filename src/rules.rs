//! Per-word transformation pipeline.

use rand::Rng;

use crate::leet;
use crate::options::{CapRule, Options};

const DIGITS: &str = "0123456789";

/// Applies the per-word pipeline in fixed order: capitalization, digit
/// padding, symbol padding, leet substitution. The order is a contract:
/// later stages operate on the output of earlier ones, so leet substitution
/// sees the padded word and skips code points that capitalization removed
/// from its lowercase table.
pub(crate) fn transform_word<R: Rng>(
    word: &[char],
    word_index: usize,
    opt: &Options,
    rng: &mut R,
) -> Vec<char> {
    let mut out = word.to_vec();

    if opt.cap_rule != CapRule::None {
        out = capitalize(&out, word_index, opt, rng);
    }
    if opt.digits_before > 0 || opt.digits_after > 0 {
        out = pad_word(&out, opt.digits_before, opt.digits_after, DIGITS, None, rng);
    }
    if opt.symbols_before > 0 || opt.symbols_after > 0 {
        out = pad_word(
            &out,
            opt.symbols_before,
            opt.symbols_after,
            &opt.symbol_pool,
            opt.symbol,
            rng,
        );
    }
    if opt.leet_ratio > 0.0 {
        let ratio = opt.leet_ratio;
        out = map_if(&out, leet::to_leet, |_, _| {
            rng.gen_range(0.0f32..1.0) <= ratio
        });
    }

    out
}

fn capitalize<R: Rng>(word: &[char], word_index: usize, opt: &Options, rng: &mut R) -> Vec<char> {
    let last = word.len().wrapping_sub(1);

    match opt.cap_rule {
        CapRule::None => word.to_vec(),
        CapRule::All => word.iter().map(|&c| leet::to_upper(c)).collect(),
        CapRule::WordAlternate => {
            if word_index % 2 == 0 {
                word.iter().map(|&c| leet::to_upper(c)).collect()
            } else {
                word.to_vec()
            }
        }
        CapRule::Alternate => map_if(word, leet::to_upper, |_, i| i % 2 == 0),
        CapRule::FirstLetter => map_if(word, leet::to_upper, |_, i| i == 0),
        CapRule::LastLetter => map_if(word, leet::to_upper, |_, i| i == last),
        CapRule::AllButFirstLetter => map_if(word, leet::to_upper, |_, i| i != 0),
        CapRule::AllButLastLetter => map_if(word, leet::to_upper, |_, i| i != last),
        CapRule::Random => {
            let ratio = opt.cap_ratio;
            map_if(word, leet::to_upper, |_, _| {
                rng.gen_range(0.0f32..1.0) <= ratio
            })
        }
    }
}

/// Rebuilds a word, transforming only the code points the predicate selects.
fn map_if<P>(word: &[char], transform: fn(char) -> char, mut select: P) -> Vec<char>
where
    P: FnMut(char, usize) -> bool,
{
    word.iter()
        .enumerate()
        .map(|(i, &c)| if select(c, i) { transform(c) } else { c })
        .collect()
}

/// Pads a word with `before` and `after` characters: a fixed character
/// repeats, otherwise each one is drawn uniformly from the pool. Allocates
/// the padded word once and copies pad-before, word, pad-after in order.
pub(crate) fn pad_word<R: Rng>(
    word: &[char],
    before: usize,
    after: usize,
    pool: &str,
    fixed: Option<char>,
    rng: &mut R,
) -> Vec<char> {
    let mut out = Vec::with_capacity(word.len() + before + after);
    extend_padding(&mut out, before, pool, fixed, rng);
    out.extend_from_slice(word);
    extend_padding(&mut out, after, pool, fixed, rng);
    out
}

fn extend_padding<R: Rng>(
    out: &mut Vec<char>,
    count: usize,
    pool: &str,
    fixed: Option<char>,
    rng: &mut R,
) {
    match fixed {
        Some(c) => out.extend(std::iter::repeat_n(c, count)),
        None => out.extend(draw_from(pool, count, rng)),
    }
}

/// Draws `count` characters uniformly, with replacement, from the pool.
pub(crate) fn draw_from<R: Rng>(pool: &str, count: usize, rng: &mut R) -> Vec<char> {
    let chars: Vec<char> = pool.chars().collect();
    (0..count)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}
