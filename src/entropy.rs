//! Model-based entropy estimation.

use std::collections::HashSet;

use crate::options::{CapRule, Options, PadRule, SepRule, SymbolRule};

/// Estimates entropy in bits as `length * log2(range)`, where the range is
/// the size of the alphabet the enabled rules can reach: 26 lowercase
/// letters, doubled when any capitalization applies, plus 10 when digits or
/// leet substitution can appear, plus every distinct symbol reachable
/// through symbol padding, the separator and final padding.
///
/// The model treats every code point as an independent uniform draw over
/// that alphabet. It deliberately ignores how much structure the word
/// source leaves in place, so it overstates resistance against an attacker
/// who knows the dictionary.
pub(crate) fn estimate(opt: &Options, length: usize) -> f64 {
    let mut range = 26usize;
    let mut symbols: HashSet<char> = HashSet::new();

    if opt.cap_rule != CapRule::None {
        range *= 2;
    }
    if opt.digits_before > 0 || opt.digits_after > 0 || opt.leet_ratio > 0.0 {
        range += 10;
    }

    if opt.symbols_before > 0 || opt.symbols_after > 0 {
        match opt.symbol_rule {
            SymbolRule::Fixed => symbols.extend(opt.symbol),
            SymbolRule::Random => symbols.extend(opt.symbol_pool.chars()),
        }
    }

    match opt.sep_rule {
        SepRule::Fixed => symbols.extend(opt.separator),
        SepRule::Random => symbols.extend(opt.separator_pool.chars()),
        SepRule::None => {}
    }

    // Rule presence counts here, not realized padding: a fixed or random
    // pad rule widens the modeled alphabet even when no padding was needed.
    match opt.pad_rule {
        PadRule::Fixed => symbols.extend(opt.pad_symbol),
        PadRule::Random => symbols.extend(opt.symbol_pool.chars()),
        PadRule::None => {}
    }

    range += symbols.len();

    length as f64 * (range as f64).log2()
}
