use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dayn::DaynError;

/// Discover the puzzle repository root from an invocation directory.
///
/// Markers, in priority order across the whole ancestor walk:
/// - `tools/dayn.rs` (the stub template)
/// - `.git/` or `.git` file (git repo root / worktree)
/// - `puzzles/` (per-day input directories)
///
/// The `puzzles/` check runs last and only over the full walk because the
/// source module directory `<root>/src/puzzles` also satisfies a bare
/// `puzzles` probe: checking it level by level would resolve `<root>/src`
/// as the root when invoked from inside `<root>/src`.
pub(crate) fn discover_repo_root(start: &Path) -> Option<PathBuf> {
    find_ancestor(start, |dir| dir.join("tools").join("dayn.rs").is_file())
        .or_else(|| find_ancestor(start, |dir| dir.join(".git").exists()))
        .or_else(|| find_ancestor(start, |dir| dir.join("puzzles").is_dir()))
}

fn find_ancestor(start: &Path, marker: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| marker(dir))
        .map(Path::to_path_buf)
}

/// Explicit `--root` wins; otherwise walk up from the current directory.
pub(crate) fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    discover_repo_root(&cwd).ok_or_else(|| DaynError::RepoNotFound { start: cwd }.into())
}
