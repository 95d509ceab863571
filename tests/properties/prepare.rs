//! Property tests for the core scaffolding operation.

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;

use dayn::scaffold::{default_template_path, prepare_day, read_manifest_days, DayPaths};

const TEMPLATE: &str = "pub(crate) fn main() {}\n";

fn day_token() -> impl Strategy<Value = String> {
    // lowercase only: distinct tokens must stay distinct as paths on
    // case-insensitive filesystems
    proptest::string::string_regex("[a-z0-9_]{1,12}").unwrap()
}

fn repo_with_template() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let template = default_template_path(dir.path());
    fs::create_dir_all(template.parent().unwrap()).unwrap();
    fs::write(&template, TEMPLATE).unwrap();
    (dir, template)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: preparing a day twice is equivalent to preparing it once.
    #[test]
    fn property_prepare_is_idempotent(day in day_token()) {
        let (repo, template) = repo_with_template();
        let root = repo.path();
        let paths = DayPaths::new(root, &day);

        let first = prepare_day(root, &day, &template).unwrap();
        prop_assert!(first.stub_created);
        let stub = fs::read(&paths.source_stub).unwrap();
        let manifest = fs::read_to_string(&paths.module_manifest).unwrap();

        let second = prepare_day(root, &day, &template).unwrap();
        prop_assert!(!second.stub_created);
        prop_assert_eq!(fs::read(&paths.source_stub).unwrap(), stub);
        prop_assert_eq!(fs::read_to_string(&paths.module_manifest).unwrap(), manifest);
    }

    /// PROPERTY: each distinct day is registered exactly once, in
    /// preparation order, regardless of repeats in the input.
    #[test]
    fn property_manifest_registers_each_day_once(
        days in proptest::collection::vec(day_token(), 1..6)
    ) {
        let (repo, template) = repo_with_template();
        let root = repo.path();

        let mut unique: Vec<String> = Vec::new();
        for day in &days {
            prepare_day(root, day, &template).unwrap();
            if !unique.contains(day) {
                unique.push(day.clone());
            }
        }

        prop_assert_eq!(read_manifest_days(root).unwrap(), unique);
    }

    /// PROPERTY: existing input content survives re-preparation.
    #[test]
    fn property_input_content_preserved(
        day in day_token(),
        content in "[ -~]{0,64}"
    ) {
        let (repo, template) = repo_with_template();
        let root = repo.path();
        let paths = DayPaths::new(root, &day);

        prepare_day(root, &day, &template).unwrap();
        fs::write(&paths.input_file, &content).unwrap();

        prepare_day(root, &day, &template).unwrap();
        prop_assert_eq!(fs::read_to_string(&paths.input_file).unwrap(), content);
    }

    /// PROPERTY: a newly created input file is empty.
    #[test]
    fn property_new_input_file_is_empty(day in day_token()) {
        let (repo, template) = repo_with_template();
        let root = repo.path();
        let paths = DayPaths::new(root, &day);

        let outcome = prepare_day(root, &day, &template).unwrap();

        prop_assert!(outcome.input_file_created);
        prop_assert_eq!(fs::read_to_string(&paths.input_file).unwrap(), "");
    }
}
