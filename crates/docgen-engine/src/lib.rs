//! Structured document assembly.
//!
//! Turns a merged template (a template descriptor, a case record and the
//! mapped variables the merge engine produced) into a rich-text document
//! tree: sections of styled paragraphs and runs, with one body builder per
//! template category. The tree serializes to a JSON blob for the external
//! binary document serializer; the binary encoding itself is out of scope.
//!
//! Builders never fail. Every missing value degrades to a bracketed
//! placeholder so the output is always a syntactically complete document,
//! even when substantively incomplete.

pub mod builders;
pub mod document;
pub mod error;

pub use builders::build_document;
pub use document::{Alignment, DocumentTree, Paragraph, Section, TextRun};
pub use error::DocGenError;
