use serde::{Deserialize, Serialize};

/// Document category a template belongs to; selects the preview skeleton
/// and the structured-document builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Contract,
    Court,
    Communication,
    Other,
}

/// Declared type of a template variable. Advisory only: the merge engine
/// never coerces or validates values against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableType {
    Text,
    Date,
    Number,
    Currency,
    Email,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// Placeholder key, matched case-insensitively during resolution
    pub name: String,
    /// Human label shown in editors and generic documents
    pub description: String,
    pub var_type: VariableType,
    /// Required variables that resolve empty fail validation
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A document blueprint: named placeholder variables plus a category.
///
/// Invariant: variable names are unique within one template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TemplateCategory,
    /// Declaration order is preserved in merge output
    pub variables: Vec<TemplateVariable>,
}

impl Template {
    /// Look up a declared variable by name, case-insensitively
    pub fn variable(&self, name: &str) -> Option<&TemplateVariable> {
        self.variables
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }
}
