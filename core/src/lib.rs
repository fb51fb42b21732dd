//! Build sorted plain-text wordlists from installed Aspell dictionaries.
//!
//! For each language code, `wordstock` pipes the output of
//! `aspell dump master` through `aspell expand`, sorts the expanded word
//! forms, and writes them to `<code>.txt`, one word per line. Languages are
//! independent units of work: a missing dictionary is reported and skipped
//! while the rest of the batch carries on.
//!
//! The resulting files are the kind of wordlists consumed by the bundled
//! [`passphrase`] generator.
//!
//! ```no_run
//! use wordstock::{Converter, DEFAULT_LANGUAGES};
//!
//! let converter = Converter::new(".");
//! let report = converter.convert_all(DEFAULT_LANGUAGES.iter().copied())?;
//! println!("{} wordlists written", report.converted.len());
//! # Ok::<(), wordstock::ConvertError>(())
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};

pub use crate::{
    aspell::{Aspell, Stage},
    errors::{ConvertError, ToolError},
    languages::DEFAULT_LANGUAGES,
    word_lists::{WordList, WordListError, WordListIter},
};

mod aspell;
pub mod errors;
mod languages;
pub mod passphrase;
mod word_lists;

/// Converts installed dictionaries into sorted wordlist files.
pub struct Converter {
    aspell: Aspell,
    out_dir: PathBuf,
}

impl Converter {
    /// Create a converter writing to `out_dir`, using `aspell` from `PATH`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Converter::with_aspell(Aspell::new(), out_dir)
    }

    /// Create a converter with an explicit [`Aspell`] invocation.
    pub fn with_aspell(aspell: Aspell, out_dir: impl Into<PathBuf>) -> Self {
        Converter {
            aspell,
            out_dir: out_dir.into(),
        }
    }

    /// Convert one language: dump, expand, sort, and write
    /// `<out_dir>/<language>.txt`.
    ///
    /// The word forms are sorted by byte order, locale-independent, with
    /// duplicates dropped. The output file is only created once the whole
    /// pipeline has succeeded; a failed language leaves no file behind.
    pub fn convert(&self, language: &str) -> Result<Conversion, ConvertError> {
        let mut words = self.aspell.expanded_words(language)?;
        words.sort_unstable();
        words.dedup();

        let path = self.out_dir.join(format!("{language}.txt"));
        let list = WordList::new(language, words);
        list.write_to(&path).map_err(|source| ConvertError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(Conversion {
            language: language.to_owned(),
            path,
            words: list.len(),
        })
    }

    /// Convert every language in `languages`, in order.
    ///
    /// Languages are independent: a per-language failure is recorded in the
    /// returned [`BatchReport`] and the loop moves on. Only an
    /// environment-level failure (the tool itself cannot be run, see
    /// [`ConvertError::is_environment`]) aborts the batch, since no later
    /// language could succeed either.
    pub fn convert_all<'a>(
        &self,
        languages: impl IntoIterator<Item = &'a str>,
    ) -> Result<BatchReport, ConvertError> {
        let mut report = BatchReport::default();
        for language in languages {
            match self.convert(language) {
                Ok(conversion) => {
                    info!(
                        "wrote {} ({} words)",
                        conversion.path.display(),
                        conversion.words,
                    );
                    report.converted.push(conversion);
                },
                Err(error) if error.is_environment() => return Err(error),
                Err(error) => {
                    warn!("skipping {language}: {error}");
                    report.failed.push(FailedConversion {
                        language: language.to_owned(),
                        error,
                    });
                },
            }
        }
        Ok(report)
    }

    /// The directory wordlist files are written to.
    #[inline]
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

/// One successfully written wordlist.
#[derive(Debug)]
pub struct Conversion {
    /// The dictionary code that was converted.
    pub language: String,
    /// Where the wordlist was written.
    pub path: PathBuf,
    /// How many words the file contains.
    pub words: usize,
}

/// One language that could not be converted.
#[derive(Debug)]
pub struct FailedConversion {
    /// The dictionary code that failed.
    pub language: String,
    /// Why it failed.
    pub error: ConvertError,
}

/// The outcome of [`Converter::convert_all`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Languages that produced a wordlist file, in input order.
    pub converted: Vec<Conversion>,
    /// Languages that failed, in input order.
    pub failed: Vec<FailedConversion>,
}

impl BatchReport {
    /// Returns `true` if every requested language was converted.
    #[inline]
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}
