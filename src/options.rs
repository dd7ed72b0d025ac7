//! Generation options and their validation.

use crate::error::{Error, Result};

/// Hard ceiling on the configurable word length bounds.
pub const MAX_WORD_LENGTH: usize = 28;

/// Pool used for symbols and separators when the caller supplies none.
pub const DEFAULT_POOL: &str = "@&!-_^$*%,.;:/=+";

const DEFAULT_WORD_COUNT: usize = 3;
const DEFAULT_MIN_WORD_LENGTH: usize = 6;
const DEFAULT_MAX_WORD_LENGTH: usize = 8;
const DEFAULT_CAP_RATIO: f32 = 0.2;
const DEFAULT_SYMBOL: char = '/';
const DEFAULT_SEPARATOR: char = '-';
const DEFAULT_PAD_SYMBOL: char = '.';

/// Which code points of a word get uppercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapRule {
    #[default]
    None,
    /// Every code point.
    All,
    /// Even positions within the word, 0-based.
    Alternate,
    /// Even-indexed words are fully uppercased, odd-indexed ones untouched.
    WordAlternate,
    FirstLetter,
    LastLetter,
    AllButFirstLetter,
    AllButLastLetter,
    /// Each code point independently, with probability `cap_ratio`.
    Random,
}

/// How consecutive words are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SepRule {
    None,
    /// A fixed separator code point between every pair of words.
    #[default]
    Fixed,
    /// One separator drawn from `separator_pool`, once per password.
    Random,
}

/// How per-word symbol padding characters are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolRule {
    /// A single fixed symbol, repeated.
    Fixed,
    /// Each padding character drawn uniformly from `symbol_pool`.
    #[default]
    Random,
}

/// How final suffix padding characters are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadRule {
    /// Padding still happens when `pad_length` demands it, drawn from the
    /// symbol pool, but contributes nothing to the entropy model.
    #[default]
    None,
    Fixed,
    Random,
}

/// Where candidate words come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The bundled English word list.
    #[default]
    Dictionary,
    /// Pronounceable synthetic words.
    Random,
}

/// Password generation options. Zero and empty fields are filled with
/// defaults during validation; the caller's value wins otherwise.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Harden this passphrase instead of generating from words.
    pub passphrase: Option<String>,
    /// Where candidate words come from.
    pub source: WordSource,
    /// Number of words. Default 3.
    pub word_count: usize,
    /// Minimum word length. Default 6.
    pub min_word_length: usize,
    /// Maximum word length. Default 8.
    pub max_word_length: usize,
    /// Digits prepended to each word.
    pub digits_before: usize,
    /// Digits appended to each word.
    pub digits_after: usize,
    /// Capitalization rule.
    pub cap_rule: CapRule,
    /// Uppercase probability under `CapRule::Random`. Default 0.2.
    pub cap_ratio: f32,
    /// Symbol selection rule.
    pub symbol_rule: SymbolRule,
    /// Symbols prepended to each word.
    pub symbols_before: usize,
    /// Symbols appended to each word.
    pub symbols_after: usize,
    /// Pool for `SymbolRule::Random`. Default `@&!-_^$*%,.;:/=+`.
    pub symbol_pool: String,
    /// Symbol for `SymbolRule::Fixed`. Default `/`.
    pub symbol: Option<char>,
    /// Separator rule.
    pub sep_rule: SepRule,
    /// Pool for `SepRule::Random`. Default `@&!-_^$*%,.;:/=+`.
    pub separator_pool: String,
    /// Separator for `SepRule::Fixed`. Default `-`.
    pub separator: Option<char>,
    /// Final padding rule.
    pub pad_rule: PadRule,
    /// Pad symbol for `PadRule::Fixed`. Default `.`.
    pub pad_symbol: Option<char>,
    /// Password length to reach with suffix padding. 0 disables padding.
    pub pad_length: usize,
    /// Leet substitution probability per code point, in [0, 1]. Default 0.
    pub leet_ratio: f32,
}

impl Options {
    /// Fills defaults, then checks range and consistency invariants. Fixed
    /// rules resolve their character; pool rules clear it, so exactly one
    /// of character or pool is ever consulted downstream.
    pub(crate) fn validate(&mut self) -> Result<()> {
        if self.word_count == 0 {
            self.word_count = DEFAULT_WORD_COUNT;
        }
        if self.min_word_length == 0 {
            self.min_word_length = DEFAULT_MIN_WORD_LENGTH;
        }
        if self.max_word_length == 0 {
            self.max_word_length = DEFAULT_MAX_WORD_LENGTH;
        }
        if self.separator_pool.is_empty() {
            self.separator_pool = DEFAULT_POOL.to_string();
        }
        if self.symbol_pool.is_empty() {
            self.symbol_pool = DEFAULT_POOL.to_string();
        }

        for got in [self.min_word_length, self.max_word_length] {
            if got > MAX_WORD_LENGTH {
                return Err(Error::WordLengthOutOfRange {
                    max: MAX_WORD_LENGTH,
                    got,
                });
            }
        }
        if self.min_word_length > self.max_word_length {
            return Err(Error::WordLengthBoundsInverted {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }

        if self.cap_rule == CapRule::Random {
            if self.cap_ratio == 0.0 {
                self.cap_ratio = DEFAULT_CAP_RATIO;
            }
            if self.cap_ratio <= 0.0 || self.cap_ratio >= 1.0 {
                return Err(Error::CapRatioOutOfRange(self.cap_ratio));
            }
        }

        match self.symbol_rule {
            SymbolRule::Fixed => {
                if self.symbol.is_none() {
                    self.symbol = Some(DEFAULT_SYMBOL);
                }
            }
            SymbolRule::Random => self.symbol = None,
        }

        match self.sep_rule {
            SepRule::Fixed => {
                if self.separator.is_none() {
                    self.separator = Some(DEFAULT_SEPARATOR);
                }
            }
            SepRule::Random => self.separator = None,
            SepRule::None => {}
        }

        match self.pad_rule {
            PadRule::Fixed => {
                if self.pad_symbol.is_none() {
                    self.pad_symbol = Some(DEFAULT_PAD_SYMBOL);
                }
            }
            PadRule::Random => self.pad_symbol = None,
            PadRule::None => {}
        }

        if !(0.0..=1.0).contains(&self.leet_ratio) {
            return Err(Error::LeetRatioOutOfRange(self.leet_ratio));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_filled() {
        let mut opt = Options::default();
        opt.validate().unwrap();
        assert_eq!(opt.word_count, 3);
        assert_eq!(opt.min_word_length, 6);
        assert_eq!(opt.max_word_length, 8);
        assert_eq!(opt.symbol_pool, DEFAULT_POOL);
        assert_eq!(opt.separator_pool, DEFAULT_POOL);
        assert_eq!(opt.separator, Some('-'));
    }

    #[test]
    fn test_caller_values_kept() {
        let mut opt = Options {
            word_count: 5,
            min_word_length: 4,
            max_word_length: 4,
            separator: Some('_'),
            ..Options::default()
        };
        opt.validate().unwrap();
        assert_eq!(opt.word_count, 5);
        assert_eq!(opt.min_word_length, 4);
        assert_eq!(opt.max_word_length, 4);
        assert_eq!(opt.separator, Some('_'));
    }

    #[test]
    fn test_length_bounds_checked() {
        let mut opt = Options {
            min_word_length: 29,
            ..Options::default()
        };
        assert!(matches!(
            opt.validate(),
            Err(Error::WordLengthOutOfRange { max: 28, got: 29 })
        ));

        let mut opt = Options {
            min_word_length: 8,
            max_word_length: 6,
            ..Options::default()
        };
        assert!(matches!(
            opt.validate(),
            Err(Error::WordLengthBoundsInverted { min: 8, max: 6 })
        ));
    }

    #[test]
    fn test_cap_ratio_bounds() {
        let mut opt = Options {
            cap_rule: CapRule::Random,
            ..Options::default()
        };
        opt.validate().unwrap();
        assert_eq!(opt.cap_ratio, 0.2);

        let mut opt = Options {
            cap_rule: CapRule::Random,
            cap_ratio: 1.0,
            ..Options::default()
        };
        assert!(matches!(opt.validate(), Err(Error::CapRatioOutOfRange(_))));

        // The ratio is only constrained when the random rule selects it.
        let mut opt = Options {
            cap_rule: CapRule::All,
            cap_ratio: 7.0,
            ..Options::default()
        };
        opt.validate().unwrap();
    }

    #[test]
    fn test_leet_ratio_bounds() {
        let mut opt = Options {
            leet_ratio: 1.5,
            ..Options::default()
        };
        assert!(matches!(opt.validate(), Err(Error::LeetRatioOutOfRange(_))));

        let mut opt = Options {
            leet_ratio: -0.1,
            ..Options::default()
        };
        assert!(matches!(opt.validate(), Err(Error::LeetRatioOutOfRange(_))));
    }

    #[test]
    fn test_rule_clears_opposite_resolution() {
        let mut opt = Options {
            symbol_rule: SymbolRule::Random,
            symbol: Some('!'),
            sep_rule: SepRule::Random,
            separator: Some('_'),
            pad_rule: PadRule::Random,
            pad_symbol: Some('.'),
            ..Options::default()
        };
        opt.validate().unwrap();
        assert_eq!(opt.symbol, None);
        assert_eq!(opt.separator, None);
        assert_eq!(opt.pad_symbol, None);
    }

    #[test]
    fn test_fixed_rules_resolve_characters() {
        let mut opt = Options {
            symbol_rule: SymbolRule::Fixed,
            pad_rule: PadRule::Fixed,
            ..Options::default()
        };
        opt.validate().unwrap();
        assert_eq!(opt.symbol, Some('/'));
        assert_eq!(opt.pad_symbol, Some('.'));
    }
}
