//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the client crate source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first; the budget never grows.
//!
//! A second group checks layering: feature logic under `src/state/` stays
//! free of browser bindings so it keeps running under native `cargo test`.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the wasm instance and take every feature down with them.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with `?` or log" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with `?` or log" },
    Budget { pattern: "panic!(", max: 0, why: "return a UiError" },
    Budget { pattern: "unreachable!(", max: 0, why: "return a UiError" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss: discards errors without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "use `report` or log the error" },
    // Two failed element downcasts and one optional JS `message` lookup.
    Budget { pattern: ".ok()", max: 3, why: "inspect the error" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the code" },
];

/// Browser-only symbols that must not leak into the DOM-free layer.
const BROWSER_SYMBOLS: &[&str] = &["web_sys", "wasm_bindgen", "js_sys", "gloo_"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn is_test(&self) -> bool {
        self.path.ends_with("_test.rs") || self.path.ends_with("test_support.rs")
    }
}

fn all_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

/// Production `.rs` files under `client/src/`, excluding tests and fakes.
fn source_files() -> Vec<SourceFile> {
    all_files().into_iter().filter(|file| !file.is_test()).collect()
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path.to_string_lossy().replace('\\', "/"), content });
            }
        }
    }
}

fn hits<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path.as_str(), count))
        })
        .collect()
}

fn format_hits(hits: &[(&str, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(
        source_files().iter().any(|file| file.path.ends_with("src/lib.rs")),
        "hygiene must run from the client crate root"
    );
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let hits = hits(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn state_layer_has_no_browser_bindings() {
    let files: Vec<SourceFile> = all_files().into_iter().filter(|file| file.path.contains("src/state/")).collect();
    for symbol in BROWSER_SYMBOLS {
        let hits = hits(&files, symbol);
        assert!(hits.is_empty(), "`{symbol}` used under src/state/:\n{}", format_hits(&hits));
    }
}

#[test]
fn local_storage_is_only_touched_by_the_store() {
    let files = source_files();
    let offenders: Vec<_> = hits(&files, "local_storage(")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("util/storage.rs"))
        .collect();
    assert!(offenders.is_empty(), "localStorage accessed outside util/storage.rs:\n{}", format_hits(&offenders));
}

#[test]
fn every_sibling_test_file_is_wired() {
    let files = all_files();
    for test_file in files.iter().filter(|file| file.path.ends_with("_test.rs")) {
        let Some(name) = Path::new(&test_file.path).file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let attribute = format!("#[path = \"{name}\"]");
        assert!(
            files.iter().any(|file| file.content.contains(&attribute)),
            "{} is never included with {attribute}",
            test_file.path
        );
    }
}

#[test]
fn form_fields_are_looked_up_inside_the_contact_form() {
    let files = source_files();
    let unscoped: Vec<_> = files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .filter(|line| line.contains("FORM_FIELDS") && line.contains("query") && !line.contains("query_all_in("))
                .map(move |line| format!("  {}: {}", file.path, line.trim()))
        })
        .collect();
    assert!(unscoped.is_empty(), "form fields queried page-wide:\n{}", unscoped.join("\n"));
}
