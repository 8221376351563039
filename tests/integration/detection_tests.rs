//! End-to-end pipeline tests against on-disk fixture projects.
//!
//! Each test lays out a small Swift project in a temp directory and runs
//! the full collect/corpus/detect pipeline through the library API.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unusedresources::{find_unused_identifiers, Config};

fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// Lay out a SwiftGen-style generated file declaring the given identifiers
fn generated_file(root: &Path, relative: &str, identifiers: &[&str]) -> PathBuf {
    let body: String = identifiers
        .iter()
        .map(|id| format!("  internal static let {} = \"{}\"\n", id, id))
        .collect();
    write_file(root, relative, &format!("enum Strings {{\n{}}}\n", body))
}

// ============================================================================
// Core detection scenarios
// ============================================================================

#[test]
fn test_used_identifier_produces_no_entry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/Home.swift", "label.text = Strings.greeting\n");
    let generated = generated_file(root, "Generated/Strings.swift", &["greeting"]);

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert!(report.unused.is_empty());
    assert_eq!(report.clean, vec![generated]);
}

#[test]
fn test_unmentioned_identifier_is_reported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/Home.swift", "label.text = Strings.greeting\n");
    let generated = generated_file(root, "Generated/Strings.swift", &["farewell"]);

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(report.unused.len(), 1);
    assert_eq!(report.unused[&generated], vec!["farewell"]);
    assert!(report.clean.is_empty());
}

#[test]
fn test_two_files_one_clean_one_with_sorted_unused_pair() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/Home.swift", "show(Strings.greeting)\n");
    let used = generated_file(root, "Generated/Used.swift", &["greeting"]);
    // Declared out of order; the report sorts
    let abandoned = generated_file(root, "Generated/Abandoned.swift", &["orphanB", "orphanA"]);

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[used.clone(), abandoned.clone()],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(report.unused.len(), 1);
    assert_eq!(report.unused[&abandoned], vec!["orphanA", "orphanB"]);
    assert_eq!(report.clean, vec![used]);
}

#[test]
fn test_mention_inside_excluded_directory_does_not_count() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/Home.swift", "label.text = Strings.greeting\n");
    // The only mention of "farewell" sits under the excluded marker
    write_file(
        root,
        "Generated/Preview.swift",
        "label.text = Strings.farewell\n",
    );
    let generated = generated_file(root, "Generated/Strings.swift", &["farewell"]);

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(report.unused[&generated], vec!["farewell"]);
}

#[test]
fn test_mention_inside_localization_file_does_not_count() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let root = project.path();
    write_file(root, "Sources/App.swift", "unrelated source text\n");
    // The only mention of "farewell" sits in the localization file
    write_file(
        root,
        "Resources/Localizable.swift",
        "\"farewell\" = \"Bye\";\n",
    );
    // The generated file lives outside the scanned root
    let generated = generated_file(elsewhere.path(), "Strings.swift", &["farewell"]);

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(report.unused[&generated], vec!["farewell"]);
}

// ============================================================================
// Determinism and idempotence
// ============================================================================

#[test]
fn test_pipeline_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/App.swift", "use(Strings.kept)\n");
    let generated = generated_file(root, "Generated/Strings.swift", &["kept", "dropped"]);

    let config = Config::default();
    let roots = [root.to_path_buf()];
    let files = [generated];

    let first = find_unused_identifiers(&roots, &files, &config).unwrap();
    let second = find_unused_identifiers(&roots, &files, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_report_keys_are_sorted_by_path() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/App.swift", "nothing used\n");

    let files: Vec<PathBuf> = ["Generated/C.swift", "Generated/A.swift", "Generated/B.swift"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = format!("orphan{}", i);
            generated_file(root, name, &[id.as_str()])
        })
        .collect();

    let report =
        find_unused_identifiers(&[root.to_path_buf()], &files, &Config::default()).unwrap();

    let keys: Vec<&PathBuf> = report.unused.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(report.unused.len(), 3);
}

// ============================================================================
// Collector contract
// ============================================================================

#[test]
fn test_multiple_roots_feed_one_corpus() {
    let app = TempDir::new().unwrap();
    let widget = TempDir::new().unwrap();
    write_file(app.path(), "Sources/App.swift", "use(Strings.fromApp)\n");
    write_file(
        widget.path(),
        "Sources/Widget.swift",
        "use(Strings.fromWidget)\n",
    );
    let generated = generated_file(
        app.path(),
        "Generated/Strings.swift",
        &["fromApp", "fromWidget"],
    );

    let report = find_unused_identifiers(
        &[app.path().to_path_buf(), widget.path().to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert!(report.unused.is_empty());
    assert_eq!(report.clean, vec![generated]);
}

#[test]
fn test_unreadable_root_aborts_run() {
    let temp = TempDir::new().unwrap();
    let generated = generated_file(temp.path(), "Strings.swift", &["x"]);

    let result = find_unused_identifiers(
        &[PathBuf::from("/no/such/root")],
        &[generated],
        &Config::default(),
    );

    assert!(result.is_err());
}

#[test]
fn test_malformed_declaration_surfaces_as_unused() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write_file(root, "Sources/App.swift", "plenty of source text\n");
    // Declaration line with no ` =` token extracts an empty identifier
    let generated = write_file(
        root,
        "Generated/Strings.swift",
        "internal static let dangling\n",
    );

    let report = find_unused_identifiers(
        &[root.to_path_buf()],
        &[generated.clone()],
        &Config::default(),
    )
    .unwrap();

    assert_eq!(report.unused[&generated], vec![""]);
}
