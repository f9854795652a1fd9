use serde::{Deserialize, Serialize};

/// Provenance of a resolved variable value: which resolution strategy
/// produced it. Ordering here mirrors the resolution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableSource {
    /// Caller supplied the value explicitly
    #[serde(rename = "manual")]
    Manual,
    /// Template-specific override table, or a court-group generic hit
    #[serde(rename = "case-specific-mapping")]
    CaseSpecific,
    /// Generic mapping table over case/finance/team fields
    #[serde(rename = "case-general-mapping")]
    CaseGeneral,
    /// Derived value such as today's date
    #[serde(rename = "derived-default")]
    DerivedDefault,
    /// The template's declared default value
    #[serde(rename = "template-default")]
    TemplateDefault,
    /// Nothing matched: bracketed placeholder if required, blank otherwise
    #[serde(rename = "empty")]
    Empty,
}

/// Resolution result for one template variable against one case record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedVariable {
    pub name: String,
    /// May be blank or a bracketed placeholder like "[JUZGADO]"
    pub value: String,
    pub source: VariableSource,
    pub description: String,
}

/// Outcome of merging a template against a case record.
///
/// Always fully populated: a failed merge still carries the preview and the
/// complete mapped-variable list so callers can highlight what is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeResult {
    /// True iff no required variable resolved to `Empty`
    pub success: bool,
    /// One message per unsatisfied required variable
    pub errors: Vec<String>,
    /// Plain-text rendering with placeholders substituted
    pub preview: String,
    /// Exactly one entry per declared variable, in declaration order
    pub mapped_variables: Vec<MappedVariable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tags_use_original_wire_names() {
        let tags = [
            (VariableSource::Manual, "\"manual\""),
            (VariableSource::CaseSpecific, "\"case-specific-mapping\""),
            (VariableSource::CaseGeneral, "\"case-general-mapping\""),
            (VariableSource::DerivedDefault, "\"derived-default\""),
            (VariableSource::TemplateDefault, "\"template-default\""),
            (VariableSource::Empty, "\"empty\""),
        ];
        for (tag, expected) in tags {
            assert_eq!(serde_json::to_string(&tag).unwrap(), expected);
        }
    }
}
