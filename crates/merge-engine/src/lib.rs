//! Template merge engine for case documents.
//!
//! Resolves a template's declared variables against a case record through a
//! prioritized pipeline (manual override, template-specific mapping, generic
//! mapping, derived current date, template default, placeholder fallback),
//! validates that required variables got a value, and renders a plain-text
//! preview. The structured rich-text document lives in `docgen-engine`.
//!
//! Resolution never fails: missing data degrades to bracketed placeholders
//! or blanks, and a failed validation still returns the full preview and
//! mapped-variable list so callers can ask for manual input and retry.

pub mod filename;
pub mod mappings;
pub mod merge;
pub mod preview;
pub mod registry;
pub mod suggestions;

mod resolver;

pub use filename::{suggest_filename, suggest_filename_today};
pub use merge::merge;
pub use registry::{builtin_templates, find_template};
pub use suggestions::suggested_variables;
