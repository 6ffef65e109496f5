//! Layering guardrails to keep the analysis crates free of rewrite-only dependencies.
//!
//! `chisel_syntax` and `chisel_core` answer structural questions over tokens; pattern-based text
//! rewriting (`regex`) belongs to the `chisel` fixers. This test scans the member manifests and fails if
//! `regex` appears in their `[dependencies]`.

fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn syntax_crate_does_not_depend_on_regex() {
    let deps = dependency_names(include_str!("../crates/chisel_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "chisel_core"), "manifest scan found {deps:?}");
    assert!(
        !deps.iter().any(|d| d == "regex"),
        "`regex` must not appear in chisel_syntax [dependencies]; rewriting lives in the root crate"
    );
}

#[test]
fn core_crate_has_no_dependencies() {
    let deps = dependency_names(include_str!("../crates/chisel_core/Cargo.toml"));
    assert!(deps.is_empty(), "chisel_core must stay dependency-free, found {deps:?}");
}
