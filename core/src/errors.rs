//! The errors produced while converting dictionaries into wordlists.

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use crate::aspell::Stage;

/// A dictionary could not be converted into a wordlist.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The tool ran, but has no dictionary data for the requested code.
    #[error("no dictionary installed for \"{language}\": {details}")]
    MissingDictionary {
        /// The code the tool did not recognise.
        language: String,
        /// What the tool printed on stderr.
        details: String,
    },
    /// The tool binary itself could not be run.
    #[error(transparent)]
    Tool(#[from] ToolError),
    /// A pipeline stage exited unsuccessfully for a non-dictionary reason.
    #[error("aspell {stage} for \"{language}\" failed ({status}): {details}")]
    StageFailed {
        /// Which stage of the pipeline failed.
        stage: Stage,
        /// The language being converted.
        language: String,
        /// The stage's exit status.
        status: ExitStatus,
        /// What the stage printed on stderr.
        details: String,
    },
    /// Reading the pipeline's output failed mid-stream.
    #[error("failed to read aspell output for \"{language}\": {source}")]
    Read {
        /// The language being converted.
        language: String,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The wordlist file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl ConvertError {
    /// Returns `true` when the failure indicates a broken environment (the
    /// tool cannot be run at all) rather than a problem with one language.
    ///
    /// Batch runs abort on environment errors and continue past the rest,
    /// since no language can convert without the tool.
    #[inline]
    #[must_use]
    pub fn is_environment(&self) -> bool {
        matches!(self, ConvertError::Tool(_))
    }
}

// New-typed so the io::Error stays out of ConvertError's public surface
/// The dictionary tool binary could not be invoked.
#[derive(Debug, Error)]
#[error("could not run {} for the {stage} stage: {source}", .command.display())]
pub struct ToolError {
    pub(crate) command: PathBuf,
    pub(crate) stage: Stage,
    pub(crate) source: io::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_errors_are_environment_errors() {
        let err = ConvertError::Tool(ToolError {
            command: PathBuf::from("aspell"),
            stage: Stage::Dump,
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert!(err.is_environment());
    }

    #[test]
    fn missing_dictionaries_are_per_language_errors() {
        let err = ConvertError::MissingDictionary {
            language: "xx".into(),
            details: "No word lists can be found".into(),
        };
        assert!(!err.is_environment());
        assert!(err.to_string().contains("xx"));
    }
}
