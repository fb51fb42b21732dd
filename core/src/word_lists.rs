//! Wordlist files: one word per line, UTF-8, no header or trailer.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    slice,
};

use thiserror::Error;

/// A list of words for one language.
#[derive(Debug)]
pub struct WordList {
    language: String,
    words: Vec<String>,
}

impl WordList {
    /// Create a word list from already-collected words.
    pub fn new(language: impl Into<String>, words: Vec<String>) -> Self {
        WordList {
            language: language.into(),
            words,
        }
    }

    /// Load a word list from a file.
    ///
    /// Words are split on whitespace, so one-word-per-line files and
    /// space-separated files load the same way. The language name is taken
    /// from the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let file_content = fs::read_to_string(path).map_err(|io_err| {
            WordListError::FailedToRead(path.to_owned(), io_err)
        })?;
        let language = path
            .file_stem()
            .ok_or_else(|| {
                WordListError::FailedToRead(
                    path.to_owned(),
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        "file name is empty",
                    ),
                )
            })?
            .to_string_lossy()
            .into_owned();

        Ok(WordList {
            language,
            words: file_content
                .split_whitespace()
                .filter(|word| !word.is_empty())
                .map(String::from)
                .collect(),
        })
    }

    /// Write the list to `path`, one word per line, replacing any existing
    /// file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut out = BufWriter::new(fs::File::create(path)?);
        self.words
            .iter()
            .try_for_each(|word| writeln!(out, "{word}"))?;
        out.flush()
    }

    /// Get the language this list belongs to.
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Iterate through the word list.
    pub fn iter(&self) -> WordListIter {
        WordListIter(self.words.iter())
    }

    /// Get how many words there are in the word list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no words in the word list.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An iterator over a [`WordList`].
///
/// Returned by [`WordList::iter`].
#[derive(Debug)]
pub struct WordListIter<'a>(slice::Iter<'a, String>);

impl<'a> Iterator for WordListIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_ref)
    }
}

impl ExactSizeIterator for WordListIter<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl DoubleEndedIterator for WordListIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(String::as_ref)
    }
}

/// An error encountered while loading a [`WordList`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WordListError {
    /// Unable to read the word list file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
}
