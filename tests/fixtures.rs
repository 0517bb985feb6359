//! Black-box fixture tests (§10.4): every `testdata/*.monkey` file is
//! parsed and evaluated against a fresh environment, and its `Inspect`
//! output must match the sibling `.expected` file of the same stem.

use std::fs;
use std::path::PathBuf;

use monkey_object::Environment;
use walkdir::WalkDir;

fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

#[test]
fn every_script_matches_its_expected_output() {
    let mut checked = 0;
    for entry in WalkDir::new(testdata_dir()) {
        let entry = entry.expect("walking testdata");
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("monkey") {
            continue;
        }

        let source = fs::read_to_string(entry.path())
            .unwrap_or_else(|err| panic!("reading {}: {err}", entry.path().display()));
        let expected_path = entry.path().with_extension("expected");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|err| panic!("reading {}: {err}", expected_path.display()))
            .trim_end()
            .to_string();

        let env = Environment::new();
        let actual = match monkey::eval(&source, &env) {
            Ok(result) => result.to_string(),
            Err(errors) => errors.join("\n"),
        };

        assert_eq!(actual, expected, "mismatch evaluating {}", entry.path().display());
        checked += 1;
    }
    assert!(checked > 0, "expected at least one .monkey fixture under testdata/");
}
