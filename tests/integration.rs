use filescout::{FileFinder, FinderBuilder, find};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// Manifest discovery, the way an embedding application would drive the
// finder: bounded depth, a manifest name pattern, and a content predicate
// that tells real module manifests apart from decoys.
#[test]
fn integration_module_discovery_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("module.json"), r#"{"type": "module"}"#).unwrap();
    fs::create_dir_all(dir.path().join("acme/feature")).unwrap();
    fs::write(
        dir.path().join("acme/feature/module.json"),
        r#"{"type": "module"}"#,
    )
    .unwrap();
    fs::write(dir.path().join("acme/feature/readme.txt"), "a module, in prose").unwrap();
    fs::create_dir_all(dir.path().join("acme/library")).unwrap();
    fs::write(
        dir.path().join("acme/library/module.json"),
        r#"{"type": "library"}"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("vega/feature/extra")).unwrap();
    fs::write(
        dir.path().join("vega/feature/extra/module.json"),
        r#"{"type": "module"}"#,
    )
    .unwrap();

    let options = FinderBuilder::new(dir.path())
        .max_depth(3)
        .filename_pattern(r"module\.json$")
        .predicate(|entry| Ok(entry.read_to_string()?.contains(r#""module""#)))
        .build()
        .unwrap();

    let found: BTreeSet<PathBuf> = find(options).unwrap().into_iter().collect();
    let expected: BTreeSet<PathBuf> = [
        dir.path().join("module.json"),
        dir.path().join("acme/feature/module.json"),
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn integration_repeated_traversals_yield_same_set() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.rs"), "fn main() {}").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/two.rs"), "pub fn two() {}").unwrap();

    let options = FinderBuilder::new(dir.path())
        .filename_pattern(r"\.rs$")
        .build()
        .unwrap();
    let finder = FileFinder::new(options);

    let first: BTreeSet<PathBuf> = finder.find_paths().map(|p| p.unwrap()).collect();
    let second: BTreeSet<PathBuf> = finder.find_paths().map(|p| p.unwrap()).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);

    // The eager wrapper sees the same set as the stream.
    let eager: BTreeSet<PathBuf> = find(finder.options().clone())
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(eager, first);
}
