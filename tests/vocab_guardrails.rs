//! Keyword identity must come from `chisel_core::lang::keywords`, never from comparing token text.
//!
//! The analyzer resolves `while`, `function`, `class` and friends through `TokenKind::Keyword(id)`.
//! A literal like `text == "while"` silently misses `WHILE` (PHP keywords are case-insensitive) and
//! drifts from the registry, so production sources are scanned for keyword literals used as
//! comparison operands or match patterns.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chisel_core::lang::keywords;
use regex::Regex;

/// A string literal on either side of `==`/`!=`, or leading a match arm or or-pattern.
static LITERAL_TEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:==|!=)\s*"(\w+)"|"(\w+)"\s*(?:=>|\|)"#).expect("guardrail pattern compiles")
});

struct Finding {
    path: PathBuf,
    line: usize,
    spelling: String,
}

/// Production part of a Rust source file: everything before its `#[cfg(test)]` module.
fn production_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
}

fn keyword_literals(line: &str) -> Vec<String> {
    LITERAL_TEST
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().to_string())
        .filter(|word| keywords::from_str(word).is_some())
        .collect()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            // Integration tests may spell keywords freely.
            if path.file_name().is_some_and(|n| n == "tests") {
                continue;
            }
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// The registry module is where spellings are defined.
fn is_registry(root: &Path, path: &Path) -> bool {
    path.starts_with(root.join("crates/chisel_core/src/lang"))
}

#[test]
fn production_code_compares_keywords_by_id() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mut files = Vec::new();
    rust_sources(&root.join("src"), &mut files);
    rust_sources(&root.join("crates"), &mut files);
    assert!(!files.is_empty(), "no sources found under {}", root.display());

    let mut findings = Vec::new();
    for path in files.into_iter().filter(|p| !is_registry(&root, p)) {
        let contents = fs::read_to_string(&path).unwrap_or_default();
        for (idx, line) in production_lines(&contents) {
            for spelling in keyword_literals(line) {
                findings.push(Finding {
                    path: path.clone(),
                    line: idx + 1,
                    spelling,
                });
            }
        }
    }

    let report: Vec<String> = findings
        .iter()
        .map(|f| {
            let rel = f.path.strip_prefix(&root).unwrap_or(&f.path);
            format!("{}:{}: keyword {:?} compared as text", rel.display(), f.line, f.spelling)
        })
        .collect();
    assert!(report.is_empty(), "use KeywordId instead:\n{}", report.join("\n"));
}

#[test]
fn literal_detection() {
    assert_eq!(keyword_literals(r#"if text == "function" {"#), vec!["function"]);
    assert_eq!(keyword_literals(r#"    "class" | "trait" => true,"#), vec!["class", "trait"]);
    assert_eq!(keyword_literals(r#"if name != "While" {"#), vec!["While"]);
    // not keywords, or not compared
    assert!(keyword_literals(r#"if text == "functions" {"#).is_empty());
    assert!(keyword_literals(r#"self.starts_with("<?php")"#).is_empty());
    assert!(keyword_literals(r#"let tags = ["link", "example"];"#).is_empty());
}

#[test]
fn test_modules_and_comments_are_skipped() {
    let source = "let a = 1;\n// x == \"while\"\nfn f() {}\n#[cfg(test)]\nmod tests {}\n";
    let lines: Vec<usize> = production_lines(source).map(|(i, _)| i).collect();
    assert_eq!(lines, vec![0, 2]);
}
