//! dayn - puzzle-day scaffolding tool
//!
//! dayn prepares the working material for one day of a daily-puzzle
//! repository: a per-day input directory with an empty `input.txt`, a source
//! stub copied once from a boilerplate template, and a registration line
//! appended once to the puzzle module manifest.

pub mod error;
pub mod scaffold;

// Re-exports for convenience
pub use error::{DaynError, DaynResult};
pub use scaffold::{
    default_template_path, manifest_line, module_manifest_path, prepare_day, read_manifest_days,
    DayPaths, PrepareOutcome,
};
