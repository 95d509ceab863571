//! Core scaffolding semantics.
//!
//! Derives the per-day filesystem locations from a repository root and a day
//! token, and creates them idempotently: the puzzle directory, an empty
//! `input.txt`, a source stub copied once from the template, and a
//! registration line appended once to the module manifest.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{DaynError, DaynResult};

/// Filesystem locations derived from a repository root and a day token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPaths {
    /// `<root>/puzzles/<day>/`
    pub puzzle_dir: PathBuf,
    /// `<root>/puzzles/<day>/input.txt`
    pub input_file: PathBuf,
    /// `<root>/src/puzzles/day<day>.rs`
    pub source_stub: PathBuf,
    /// `<root>/src/puzzles/mod.rs`
    pub module_manifest: PathBuf,
}

impl DayPaths {
    pub fn new(root: &Path, day: &str) -> Self {
        let puzzle_dir = root.join("puzzles").join(day);
        Self {
            input_file: puzzle_dir.join("input.txt"),
            puzzle_dir,
            source_stub: root.join("src").join("puzzles").join(format!("day{day}.rs")),
            module_manifest: module_manifest_path(root),
        }
    }
}

/// Default stub template location relative to the repository root.
pub fn default_template_path(root: &Path) -> PathBuf {
    root.join("tools").join("dayn.rs")
}

/// Module manifest location relative to the repository root.
pub fn module_manifest_path(root: &Path) -> PathBuf {
    root.join("src").join("puzzles").join("mod.rs")
}

/// Registration line appended to the module manifest for `day`.
///
/// The manifest is opaque append-only text to this tool: this is the only
/// line shape it ever writes, and nothing interprets the file as source.
pub fn manifest_line(day: &str) -> String {
    format!("pub mod day{day};\n")
}

/// What a [`prepare_day`] run actually created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareOutcome {
    pub puzzle_dir_created: bool,
    pub input_file_created: bool,
    pub stub_created: bool,
}

/// Scaffold all per-day artifacts under `root`.
///
/// Safe to re-run: an existing stub short-circuits the copy and the manifest
/// append, and an existing `input.txt` only has its mtime bumped. The stub
/// existence check and the copy are not atomic; two simultaneous runs for
/// the same day may both copy the template and at worst leave a duplicate
/// manifest line.
pub fn prepare_day(root: &Path, day: &str, template: &Path) -> DaynResult<PrepareOutcome> {
    let paths = DayPaths::new(root, day);
    let mut outcome = PrepareOutcome {
        puzzle_dir_created: !paths.puzzle_dir.is_dir(),
        ..PrepareOutcome::default()
    };

    fs::create_dir_all(&paths.puzzle_dir)?;
    outcome.input_file_created = touch(&paths.input_file)?;

    if paths.source_stub.exists() {
        return Ok(outcome);
    }

    if !template.is_file() {
        return Err(DaynError::TemplateNotFound {
            path: template.to_path_buf(),
        });
    }

    if let Some(parent) = paths.source_stub.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(template, &paths.source_stub)?;
    append_line(&paths.module_manifest, &manifest_line(day))?;
    outcome.stub_created = true;

    Ok(outcome)
}

/// Day tokens registered in the module manifest, in file order.
///
/// Lines that don't match the shape written by [`manifest_line`] are
/// skipped, and a missing manifest reads as empty.
pub fn read_manifest_days(root: &Path) -> DaynResult<Vec<String>> {
    let path = module_manifest_path(root);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    Ok(content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("pub mod day")?
                .strip_suffix(';')
                .map(str::to_string)
        })
        .collect())
}

/// Create `path` empty if missing, bump its mtime if present. Content is
/// never altered. Returns whether the file was newly created.
fn touch(path: &Path) -> DaynResult<bool> {
    let created = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    file.set_modified(SystemTime::now())?;
    Ok(created)
}

fn append_line(path: &Path, line: &str) -> DaynResult<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}
