//! Build script embedding the word lists
//!
//! Each list in `data/` becomes a `&[&str]` constant plus its length. Entries
//! are checked here so a bad word or an empty list fails the build instead
//! of surfacing at runtime.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const LISTS: [(&str, &str, &str); 2] = [
    (
        "answers",
        "ANSWERS",
        "Words eligible to be chosen as the secret answer",
    ),
    (
        "allowed",
        "ALLOWED",
        "Additional words accepted as guesses",
    ),
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    for (name, const_name, doc) in LISTS {
        let input = format!("data/{name}.txt");
        let content =
            fs::read_to_string(&input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));
        let source = render_list(&input, &content, const_name, doc);
        let output = out_dir.join(format!("{name}.rs"));
        fs::write(&output, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_list(input: &str, content: &str, const_name: &str, doc: &str) -> String {
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    assert!(!words.is_empty(), "{input} has no words");
    for word in &words {
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input}: '{word}' is not a five-letter lowercase word"
        );
    }

    let mut out = String::new();
    let _ = writeln!(out, "// Generated from {input}\n");
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in &words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];\n");
    let _ = writeln!(out, "/// Number of words in {const_name}");
    let _ = writeln!(out, "pub const {const_name}_COUNT: usize = {};", words.len());
    out
}
