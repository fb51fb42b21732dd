#![allow(missing_docs)]

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use log::{error, info};
use wordstock::{
    Aspell, Converter, DEFAULT_LANGUAGES, WordList,
    passphrase::{self, PassphraseOptions},
};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        },
    }
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type WordstockVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type WordstockVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: WordstockVerbosity,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dump and expand installed aspell dictionaries into sorted wordlists
    Convert(ConvertArgs),
    /// Generate a random passphrase from a converted wordlist
    Passphrase(PassphraseArgs),
}

#[derive(Debug, clap::Args)]
struct ConvertArgs {
    /// Dictionary codes to convert [default: the built-in set]
    languages: Vec<String>,

    /// Directory to write the `<code>.txt` files to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Path to the aspell binary [default: `aspell` on PATH]
    #[arg(long, value_name = "PATH")]
    aspell: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
struct PassphraseArgs {
    /// Wordlist to draw from; a bare name looks for `<name>.txt`
    #[arg(short, long, default_value = "en")]
    dictionary: PathBuf,

    /// Minimum number of words to use
    #[arg(long, default_value_t = 4)]
    min_words: usize,

    /// Maximum number of words to use
    #[arg(long, default_value_t = 4)]
    max_words: usize,

    /// Minimum length of the words to use
    #[arg(long, default_value_t = 4)]
    min_length: usize,

    /// Maximum length of the words to use
    #[arg(long, default_value_t = 8)]
    max_length: usize,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("WORDSTOCK_LOG"))
        .init();

    match args.command {
        Command::Convert(convert_args) => convert(&convert_args),
        Command::Passphrase(passphrase_args) => {
            generate_passphrase(&passphrase_args)
        },
    }
}

fn convert(args: &ConvertArgs) -> anyhow::Result<()> {
    let aspell = args
        .aspell
        .as_ref()
        .map_or_else(Aspell::new, Aspell::with_command);
    let converter = Converter::with_aspell(aspell, &args.out_dir);

    let languages: Vec<&str> = if args.languages.is_empty() {
        DEFAULT_LANGUAGES.to_vec()
    } else {
        args.languages.iter().map(String::as_str).collect()
    };

    let start = Instant::now();
    let report = converter
        .convert_all(languages.iter().copied())
        .context("conversion aborted")?;
    info!(
        "converted {} of {} dictionaries in {:?}",
        report.converted.len(),
        languages.len(),
        start.elapsed(),
    );

    if !report.all_succeeded() {
        report.failed.iter().for_each(|failure| {
            error!("{}: {}", failure.language, failure.error);
        });
        bail!(
            "failed to convert {} of {} dictionaries",
            report.failed.len(),
            languages.len(),
        );
    }
    Ok(())
}

fn generate_passphrase(args: &PassphraseArgs) -> anyhow::Result<()> {
    let path = resolve_wordlist(&args.dictionary);
    let list = WordList::load(&path)
        .with_context(|| format!("could not load wordlist {}", path.display()))?;
    let options = PassphraseOptions {
        min_words: args.min_words,
        max_words: args.max_words,
        min_length: args.min_length,
        max_length: args.max_length,
    };

    let mut rng = fastrand::Rng::new();
    let phrase = passphrase::generate(&list, &options, &mut rng)?;
    println!("{phrase}");
    Ok(())
}

/// A bare dictionary name refers to the matching converted wordlist, so
/// `en` resolves to `en.txt` unless a file called `en` actually exists.
fn resolve_wordlist(dictionary: &Path) -> PathBuf {
    if dictionary.exists() || dictionary.extension().is_some() {
        return dictionary.to_path_buf();
    }
    dictionary.with_extension("txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_convert_with_defaults() {
        let args =
            Args::try_parse_from(["wordstock", "convert", "en", "pt_BR"])
                .unwrap();
        let Command::Convert(convert_args) = args.command else {
            panic!("expected the convert subcommand");
        };

        assert_eq!(convert_args.languages, ["en", "pt_BR"]);
        assert_eq!(convert_args.out_dir, PathBuf::from("."));
        assert!(convert_args.aspell.is_none());
    }

    #[test]
    fn args_parse_passphrase_bounds() {
        let args = Args::try_parse_from([
            "wordstock",
            "passphrase",
            "--min-words",
            "3",
            "--max-words",
            "5",
        ])
        .unwrap();
        let Command::Passphrase(passphrase_args) = args.command else {
            panic!("expected the passphrase subcommand");
        };

        assert_eq!(passphrase_args.min_words, 3);
        assert_eq!(passphrase_args.max_words, 5);
        assert_eq!(passphrase_args.min_length, 4);
        assert_eq!(passphrase_args.max_length, 8);
        assert_eq!(passphrase_args.dictionary, PathBuf::from("en"));
    }

    #[test]
    fn bare_wordlist_names_get_a_txt_extension() {
        assert_eq!(
            resolve_wordlist(Path::new("en")),
            PathBuf::from("en.txt"),
        );
        assert_eq!(
            resolve_wordlist(Path::new("lists/words.txt")),
            PathBuf::from("lists/words.txt"),
        );
    }
}
