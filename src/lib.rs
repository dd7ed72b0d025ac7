//! Human-memorable password generation and passphrase hardening.
//!
//! Passwords are built from dictionary or synthetic words run through an
//! ordered rule pipeline (capitalization, digit and symbol padding, leet
//! substitution), joined with a separator and padded to a target length.
//! Free-form passphrases can instead be hardened to meet per-class
//! character quotas. Every result carries a model-based entropy estimate.

mod entropy;
mod error;
pub mod generator;
pub mod leet;
pub mod options;
pub mod passphrase;
mod rules;
pub mod wordlist;

pub use error::{Error, Result};
pub use generator::{generate, generate_with_rng};
pub use options::{CapRule, Options, PadRule, SepRule, SymbolRule, WordSource};
pub use passphrase::{harden, harden_with_rng};
pub use wordlist::get_wordlist;

pub use zeroize::Zeroizing;
