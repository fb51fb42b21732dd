//! End-to-end tests driving the `wordstock` binary against a fake aspell.

#![cfg(unix)]
#![allow(missing_docs)]

use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::Command,
};

const FAKE_ASPELL: &str = r#"#!/bin/sh
lang="$2"
case "$*" in
    *"dump master")
        if [ "$lang" = "xx" ]; then
            echo 'Error: No word lists can be found for the language "xx".' >&2
            exit 1
        fi
        printf 'run\nrunning\nran\n'
        ;;
    *expand)
        while IFS= read -r entry; do
            if [ "$entry" = "run" ]; then
                echo 'run runs running ran'
            else
                echo "$entry"
            fi
        done
        ;;
    *)
        echo "unexpected arguments: $*" >&2
        exit 64
        ;;
esac
"#;

fn install_fake_aspell(dir: &Path) -> PathBuf {
    let path = dir.join("fake-aspell");
    fs::write(&path, FAKE_ASPELL).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

fn wordstock() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordstock"))
}

#[test]
fn convert_writes_sorted_wordlists() {
    let dir = tempfile::tempdir().unwrap();
    let aspell = install_fake_aspell(dir.path());

    let output = wordstock()
        .args(["convert", "en", "de"])
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--aspell")
        .arg(&aspell)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    let en = fs::read_to_string(dir.path().join("en.txt")).unwrap();
    assert_eq!(en, "ran\nrun\nrunning\nruns\n");
    assert_eq!(fs::read_to_string(dir.path().join("de.txt")).unwrap(), en);
}

#[test]
fn a_missing_dictionary_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let aspell = install_fake_aspell(dir.path());

    let output = wordstock()
        .args(["convert", "xx", "en"])
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--aspell")
        .arg(&aspell)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("xx"), "stderr: {stderr}");

    // The failed language leaves no file; the rest still convert
    assert!(!dir.path().join("xx.txt").exists());
    assert!(dir.path().join("en.txt").exists());
}

#[test]
fn a_missing_tool_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();

    let output = wordstock()
        .args(["convert", "en"])
        .arg("--out-dir")
        .arg(dir.path())
        .args(["--aspell", "/nonexistent/aspell"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!dir.path().join("en.txt").exists());
}

#[test]
fn passphrase_draws_words_from_the_wordlist() {
    let dir = tempfile::tempdir().unwrap();
    let wordlist = dir.path().join("words.txt");
    fs::write(&wordlist, "apple\nbanana\ncherry\nplum\ndate\ngrape\n")
        .unwrap();

    let output = wordstock()
        .arg("passphrase")
        .arg("--dictionary")
        .arg(&wordlist)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    let words = stdout.trim().split(' ').collect::<Vec<_>>();
    assert_eq!(words.len(), 4);
    words.iter().for_each(|word| {
        assert!(
            ["apple", "banana", "cherry", "plum", "date", "grape"]
                .contains(word),
            "unexpected word {word:?}",
        );
    });
}
