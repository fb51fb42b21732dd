//! XKCD-style passphrases drawn from a wordlist.
//!
//! The scheme from <https://xkcd.com/936/>: pick a handful of common words
//! at random and join them with spaces. The wordlists produced by the
//! converter make good inputs once the very short and very long words are
//! filtered out.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::word_lists::WordList;

/// Bounds on the shape of a generated passphrase.
#[derive(Debug, Clone)]
pub struct PassphraseOptions {
    /// Minimum number of words in the passphrase.
    pub min_words: usize,
    /// Maximum number of words in the passphrase.
    pub max_words: usize,
    /// Shortest candidate word, in characters.
    pub min_length: usize,
    /// Longest candidate word, in characters.
    pub max_length: usize,
}

impl Default for PassphraseOptions {
    /// Four words of four to eight characters.
    fn default() -> Self {
        PassphraseOptions {
            min_words: 4,
            max_words: 4,
            min_length: 4,
            max_length: 8,
        }
    }
}

/// Generate one passphrase from `list`.
///
/// Candidate words are lowercased, words containing an apostrophe are
/// skipped, and only lengths within the configured window are kept. Each
/// word is drawn by first picking a random available length, then a random
/// word of that length, so every length is equally likely regardless of how
/// many words of each the list holds.
pub fn generate(
    list: &WordList,
    options: &PassphraseOptions,
    rng: &mut fastrand::Rng,
) -> Result<String, PassphraseError> {
    if options.min_words == 0 || options.min_words > options.max_words {
        return Err(PassphraseError::EmptyWordCountRange {
            min_words: options.min_words,
            max_words: options.max_words,
        });
    }

    let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in list.iter() {
        let word = word.to_lowercase();
        if word.contains('\'') {
            continue;
        }
        let length = word.chars().count();
        if (options.min_length..=options.max_length).contains(&length) {
            by_length.entry(length).or_default().push(word);
        }
    }
    if by_length.is_empty() {
        return Err(PassphraseError::NoUsableWords {
            min_length: options.min_length,
            max_length: options.max_length,
        });
    }

    let lengths = by_length.keys().copied().collect::<Vec<_>>();
    let count = rng.usize(options.min_words..=options.max_words);
    let words = (0..count)
        .map(|_| {
            let length = lengths[rng.usize(..lengths.len())];
            let candidates = &by_length[&length];
            candidates[rng.usize(..candidates.len())].as_str()
        })
        .collect::<Vec<_>>();
    Ok(words.join(" "))
}

/// Passphrase generation failed before any randomness was involved.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PassphraseError {
    /// `min_words..=max_words` contains no usable count.
    #[error("word count range {min_words}..={max_words} is empty")]
    EmptyWordCountRange {
        /// Configured minimum word count.
        min_words: usize,
        /// Configured maximum word count.
        max_words: usize,
    },
    /// Nothing in the wordlist fits the length window.
    #[error("no usable words between {min_length} and {max_length} characters")]
    NoUsableWords {
        /// Shortest allowed word.
        min_length: usize,
        /// Longest allowed word.
        max_length: usize,
    },
}
