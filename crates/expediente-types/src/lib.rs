pub mod dates;
pub mod expediente;
pub mod merge;
pub mod template;

pub use expediente::{CaseField, Expediente, Finance, Team, TeamMember};
pub use merge::{MappedVariable, MergeResult, VariableSource};
pub use template::{Template, TemplateCategory, TemplateVariable, VariableType};
