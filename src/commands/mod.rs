pub mod list;
pub mod prepare;
mod project_root;

pub(crate) use project_root::resolve_root;
