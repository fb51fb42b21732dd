//! The external dictionary tool: spawning `aspell` and wiring the
//! dump → expand pipeline.

use std::{
    fmt,
    io::{BufRead, BufReader, Read},
    path::PathBuf,
    process::{Child, ChildStdout, Command, Stdio},
};

use log::debug;

use crate::errors::{ConvertError, ToolError};

/// The default binary name, resolved through `PATH`.
const DEFAULT_COMMAND: &str = "aspell";

/// Marker text aspell prints when a language has no installed data.
const NO_WORD_LISTS: &str = "No word lists";

/// An invocation of the external dictionary tool.
///
/// The binary defaults to `aspell` on `PATH`; tests and unusual
/// installations can point at another binary with [`Aspell::with_command`].
#[derive(Debug, Clone)]
pub struct Aspell {
    command: PathBuf,
}

impl Default for Aspell {
    fn default() -> Self {
        Aspell::new()
    }
}

impl Aspell {
    /// Use `aspell` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Aspell::with_command(DEFAULT_COMMAND)
    }

    /// Use an explicit binary instead of `aspell` from `PATH`.
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Aspell {
            command: command.into(),
        }
    }

    /// Run `dump master | expand` for `language` and collect the expanded
    /// word forms.
    ///
    /// The two children are connected stdout→stdin directly. Each `expand`
    /// output line carries the space-separated forms derived from one master
    /// entry, so the stream is split on whitespace. Both children are reaped
    /// on every path out of this function, successful or not.
    pub fn expanded_words(
        &self,
        language: &str,
    ) -> Result<Vec<String>, ConvertError> {
        debug!(
            "{cmd} -d {language} dump master | {cmd} -l {language} expand",
            cmd = self.command.display(),
        );

        let mut dump = self.spawn(
            Stage::Dump,
            &["-d", language, "--encoding=utf-8", "dump", "master"],
            Stdio::null(),
        )?;
        let mut expand = self.spawn(
            Stage::Expand,
            &["-l", language, "--encoding=utf-8", "expand"],
            Stdio::from(dump.stdout()),
        )?;

        let mut words = Vec::new();
        for line in BufReader::new(expand.stdout()).lines() {
            let line = line.map_err(|source| ConvertError::Read {
                language: language.to_owned(),
                source,
            })?;
            words.extend(line.split_whitespace().map(str::to_owned));
        }

        // Check dump first: a missing dictionary fails there, and expand
        // then exits cleanly on the empty stream.
        dump.finish(language)?;
        expand.finish(language)?;
        Ok(words)
    }

    fn spawn(
        &self,
        stage: Stage,
        args: &[&str],
        stdin: Stdio,
    ) -> Result<StageChild, ConvertError> {
        let child = Command::new(&self.command)
            .args(args)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError {
                command: self.command.clone(),
                stage,
                source,
            })?;
        Ok(StageChild {
            stage,
            child,
            reaped: false,
        })
    }
}

/// The stages of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `dump master`: reads a language's master dictionary.
    Dump,
    /// `expand`: derives the inflected word forms for each entry.
    Expand,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Dump => "dump",
            Stage::Expand => "expand",
        })
    }
}

/// One running stage of the pipeline.
///
/// Killed and reaped on drop unless it has been waited on, so no stage
/// outlives a conversion that bailed out early.
struct StageChild {
    stage: Stage,
    child: Child,
    reaped: bool,
}

impl StageChild {
    fn stdout(&mut self) -> ChildStdout {
        // Always configured as piped in `spawn`
        self.child.stdout.take().unwrap()
    }

    /// Wait for the stage and classify a non-zero exit.
    fn finish(&mut self, language: &str) -> Result<(), ConvertError> {
        let status = self.child.wait().map_err(|source| ConvertError::Read {
            language: language.to_owned(),
            source,
        })?;
        self.reaped = true;

        if status.success() {
            return Ok(());
        }
        let details = self.stderr();
        if details.contains(NO_WORD_LISTS) {
            Err(ConvertError::MissingDictionary {
                language: language.to_owned(),
                details,
            })
        } else {
            Err(ConvertError::StageFailed {
                stage: self.stage,
                language: language.to_owned(),
                status,
                details,
            })
        }
    }

    /// Drain whatever the stage wrote to stderr. The pipe buffer holds it in
    /// full; aspell diagnostics are a line or two.
    fn stderr(&mut self) -> String {
        let mut buf = String::new();
        if let Some(mut pipe) = self.child.stderr.take() {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf.trim().to_owned()
    }
}

impl Drop for StageChild {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
