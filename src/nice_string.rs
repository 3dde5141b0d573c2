//! "Nice string" classification.
//!
//! A string is *nice* when at least two of three independent criteria hold:
//!
//! - it contains none of the substrings `bu`, `ba`, `be`
//! - it contains more than two lowercase vowels (`a e i o u`)
//! - it contains at least one pair of equal adjacent characters
//!
//! ```rust
//! use taxi_park::nice_string::{classify, is_nice};
//!
//! assert!(is_nice("aeiou"));
//! assert!(is_nice("xxyyzz"));
//! assert!(!is_nice("bac"));
//!
//! let report = classify("bee");
//! assert!(!report.no_forbidden_substrings);
//! assert_eq!(report.satisfied(), 1);
//! ```
//!
//! Every criterion is defined for strings of any length; the empty string only satisfies the
//! substring criterion and so is never nice.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

const FORBIDDEN_SUBSTRINGS: [&str; 3] = ["bu", "ba", "be"];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Vowel count must exceed this for [`is_vowel_rich`].
const MIN_VOWELS_EXCLUSIVE: usize = 2;

/// Per-criterion outcome for a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NiceReport {
    pub no_forbidden_substrings: bool,
    pub vowel_rich: bool,
    pub double_letter: bool,
}

impl NiceReport {
    /// Number of criteria that hold (0..=3).
    pub fn satisfied(&self) -> usize {
        [self.no_forbidden_substrings, self.vowel_rich, self.double_letter]
            .into_iter()
            .filter(|c| *c)
            .count()
    }

    pub fn is_nice(&self) -> bool {
        self.satisfied() > 1
    }
}

/// Evaluate all three criteria for `s`.
pub fn classify(s: &str) -> NiceReport {
    NiceReport {
        no_forbidden_substrings: has_no_forbidden_substrings(s),
        vowel_rich: is_vowel_rich(s),
        double_letter: has_double_letter(s),
    }
}

/// Returns `true` if at least two of the three criteria hold for `s`.
pub fn is_nice(s: &str) -> bool {
    classify(s).is_nice()
}

pub fn has_no_forbidden_substrings(s: &str) -> bool {
    !FORBIDDEN_SUBSTRINGS.iter().any(|f| s.contains(*f))
}

pub fn is_vowel_rich(s: &str) -> bool {
    s.chars().filter(|c| VOWELS.contains(c)).count() > MIN_VOWELS_EXCLUSIVE
}

pub fn has_double_letter(s: &str) -> bool {
    s.chars().tuple_windows().any(|(a, b)| a == b)
}
