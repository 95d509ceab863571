//! List command - report days registered in the module manifest.

use std::path::Path;

use anyhow::{Context, Result};

use dayn::scaffold::read_manifest_days;

use crate::commands::resolve_root;
use crate::ui;
use crate::ui::json::events::CompleteEvent;
use crate::ui::Icon;

pub fn cmd_list(root: Option<&Path>, json: bool) -> Result<()> {
    let root = resolve_root(root)?;
    let days = read_manifest_days(&root)
        .with_context(|| format!("failed to read module manifest under {}", root.display()))?;

    if json {
        for day in &days {
            let _ = ui::json::emit(serde_json::json!({
                "event": "day",
                "day": day,
            }));
        }
        let _ = ui::json::emit_event(&CompleteEvent::new("list").count(days.len()));
        return Ok(());
    }

    if days.is_empty() {
        let caps = ui::detect_capabilities();
        println!(
            "{} No days scaffolded yet. Run `dayn prepare <day>` to start.",
            Icon::Pending.colored(caps.supports_color, caps.supports_unicode)
        );
        return Ok(());
    }

    for day in &days {
        println!("{day}");
    }

    Ok(())
}
