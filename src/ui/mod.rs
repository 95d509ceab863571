//! Terminal output primitives: capability detection, semantic colors, icons.
//!
//! dayn has no logging framework; human-readable status goes through this
//! module and `--json` mode routes through [`json`] instead.

pub mod json;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// Design tokens. Only semantic colors, sourced from this module.
pub mod theme {
    use super::Color;

    pub mod colors {
        use super::Color;

        pub const SUCCESS: Color = Color::Green;
        pub const ERROR: Color = Color::Red;
        pub const INFO: Color = Color::Cyan;
        pub const DIM: Color = Color::DarkGrey;
    }

    pub mod icons {
        pub const SUCCESS: &str = "✓";
        pub const ERROR: &str = "✗";
        pub const PROGRESS: &str = "●";
        pub const PENDING: &str = "○";
        pub const ARROW: &str = "↳";
    }

    pub mod icons_ascii {
        pub const SUCCESS: &str = "[OK]";
        pub const ERROR: &str = "[FAIL]";
        pub const PROGRESS: &str = "[..]";
        pub const PENDING: &str = "[ ]";
        pub const ARROW: &str = "[>]";
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Progress,
    Pending,
    Arrow,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Progress => theme::colors::INFO,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

    KEYS.iter().any(|k| {
        get_env(k)
            .map(|v| v.to_lowercase().contains("utf"))
            .unwrap_or(false)
    })
}

/// Render an error for stderr, icon-prefixed when the terminal allows it.
pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    let icon = Icon::Error.colored(caps.supports_color, caps.supports_unicode);
    format!("{icon} {err:#}")
}
