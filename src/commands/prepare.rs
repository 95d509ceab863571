//! Prepare command - scaffold one puzzle day
//!
//! Ensures the per-day input directory and an empty `input.txt` exist,
//! copies the stub template exactly once, and registers the new module in
//! the manifest at that moment. Re-running for an existing day is safe.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dayn::scaffold::{default_template_path, manifest_line, prepare_day, DayPaths};

use crate::commands::resolve_root;
use crate::ui;
use crate::ui::json::events::CompleteEvent;
use crate::ui::Icon;

pub fn cmd_prepare(
    day: &str,
    root: Option<&Path>,
    template: Option<&Path>,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let root = resolve_root(root)?;
    let template: PathBuf = template
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_template_path(&root));
    let paths = DayPaths::new(&root, day);

    let caps = ui::detect_capabilities();

    if verbose > 0 {
        eprintln!("repository root: {}", root.display());
        eprintln!("stub template:   {}", template.display());
    }

    if json {
        let _ = ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "prepare",
            "day": day,
            "root": root.display().to_string(),
        }));
    } else {
        println!(
            "{} Preparing day {}",
            Icon::Progress.colored(caps.supports_color, caps.supports_unicode),
            day
        );
    }

    if dry_run {
        return report_plan(day, &paths, &template, json, &caps);
    }

    let outcome = prepare_day(&root, day, &template)
        .with_context(|| format!("failed to scaffold day {day}"))?;

    if json {
        let _ = ui::json::emit_event(
            &CompleteEvent::new("prepare")
                .day(day)
                .stub_created(outcome.stub_created),
        );
    } else if outcome.stub_created {
        println!(
            "{} Created {}",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode),
            paths.source_stub.display()
        );
        println!(
            "{} Registered `{}` in {}",
            Icon::Arrow.colored(caps.supports_color, caps.supports_unicode),
            manifest_line(day).trim_end(),
            paths.module_manifest.display()
        );
    } else {
        println!(
            "{} Day {} already scaffolded; refreshed {}",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode),
            day,
            paths.input_file.display()
        );
    }

    Ok(())
}

fn report_plan(
    day: &str,
    paths: &DayPaths,
    template: &Path,
    json: bool,
    caps: &ui::TerminalCapabilities,
) -> Result<()> {
    let stub_exists = paths.source_stub.exists();

    if json {
        let _ = ui::json::emit(serde_json::json!({
            "event": "plan",
            "command": "prepare",
            "day": day,
            "puzzle_dir": paths.puzzle_dir.display().to_string(),
            "input_file": paths.input_file.display().to_string(),
            "stub": paths.source_stub.display().to_string(),
            "stub_would_be_created": !stub_exists,
        }));
        return Ok(());
    }

    let arrow = Icon::Arrow.colored(caps.supports_color, caps.supports_unicode);
    println!("{arrow} would ensure {}", paths.puzzle_dir.display());
    println!("{arrow} would touch {}", paths.input_file.display());
    if stub_exists {
        println!(
            "{arrow} stub already present: {}",
            paths.source_stub.display()
        );
    } else {
        println!(
            "{arrow} would copy {} -> {}",
            template.display(),
            paths.source_stub.display()
        );
        println!(
            "{arrow} would append `{}` to {}",
            manifest_line(day).trim_end(),
            paths.module_manifest.display()
        );
    }

    Ok(())
}
