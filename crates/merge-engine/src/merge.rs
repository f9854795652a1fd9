//! Merge orchestrator: runs the resolver over every declared variable and
//! aggregates the outcome.

use std::collections::HashMap;

use expediente_types::{Expediente, MergeResult, Template, VariableSource};
use tracing::debug;

use crate::preview;
use crate::resolver::{resolve_variable, ResolveCtx};

/// Merge a template against a case record.
///
/// Pure function of its inputs plus the current date. Every declared
/// variable is resolved and returned in declaration order, including when
/// validation fails, so callers can show a partial preview and highlight
/// exactly which fields still need manual input.
pub fn merge(
    template: &Template,
    expediente: &Expediente,
    manual_overrides: Option<&HashMap<String, String>>,
) -> MergeResult {
    // Normalize override keys once; variable names match case-insensitively
    let manual: HashMap<String, String> = manual_overrides
        .map(|overrides| {
            overrides
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect()
        })
        .unwrap_or_default();

    let mut mapped_variables = Vec::with_capacity(template.variables.len());
    let mut errors = Vec::new();

    for variable in &template.variables {
        let ctx = ResolveCtx {
            template,
            expediente,
            variable,
            manual: &manual,
        };
        let mapped = resolve_variable(&ctx);

        // A required variable that fell through every strategy is a
        // validation failure, but never aborts the remaining variables
        if variable.required && mapped.source == VariableSource::Empty {
            errors.push(format!(
                "La variable '{}' ({}) requiere un valor",
                variable.name, variable.description
            ));
        }
        mapped_variables.push(mapped);
    }

    let preview = preview::render_preview(template, expediente, &mapped_variables);
    let success = errors.is_empty();

    debug!(
        template = %template.id,
        expediente = %expediente.id,
        variables = mapped_variables.len(),
        unresolved = errors.len(),
        "merge completed"
    );

    MergeResult {
        success,
        errors,
        preview,
        mapped_variables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expediente_types::{
        Finance, Team, TeamMember, TemplateCategory, TemplateVariable, VariableType,
    };
    use pretty_assertions::assert_eq;

    fn variable(name: &str, required: bool) -> TemplateVariable {
        TemplateVariable {
            name: name.to_string(),
            description: format!("Variable {}", name),
            var_type: VariableType::Text,
            required,
            default_value: None,
        }
    }

    fn court_template() -> Template {
        Template {
            id: "PLANT-002".to_string(),
            title: "Demanda por despido improcedente".to_string(),
            description: String::new(),
            category: TemplateCategory::Court,
            variables: vec![
                variable("nombre_demandante", true),
                variable("nombre_demandado", true),
                variable("juzgado", true),
                variable("importe_total", false),
                variable("fecha_hoy", false),
            ],
        }
    }

    fn expediente() -> Expediente {
        Expediente {
            id: "EXP-2024-001".to_string(),
            title: "Despido improcedente TechCorp".to_string(),
            client: "Carlos López".to_string(),
            finance: Finance {
                total: Some(18000.0),
                ..Finance::default()
            },
            team: Team {
                lawyer: Some(TeamMember {
                    name: "María García".to_string(),
                    email: "mgarcia@despacho.es".to_string(),
                }),
                supervisor: None,
            },
            ..Expediente::default()
        }
    }

    #[test]
    fn test_one_mapped_variable_per_declaration_in_order() {
        let template = court_template();
        let result = merge(&template, &expediente(), None);
        assert_eq!(result.mapped_variables.len(), template.variables.len());
        let names: Vec<_> = result.mapped_variables.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "nombre_demandante",
                "nombre_demandado",
                "juzgado",
                "importe_total",
                "fecha_hoy"
            ]
        );
    }

    #[test]
    fn test_missing_required_court_fails_but_returns_everything() {
        // The expediente has no court: juzgado is required and unresolvable
        let result = merge(&court_template(), &expediente(), None);
        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("juzgado"));

        let juzgado = result
            .mapped_variables
            .iter()
            .find(|m| m.name == "juzgado")
            .unwrap();
        assert_eq!(juzgado.value, "[JUZGADO]");
        assert_eq!(juzgado.source, VariableSource::Empty);
        // Partial preview is still produced
        assert!(!result.preview.is_empty());
    }

    #[test]
    fn test_succeeds_when_all_required_resolve() {
        let exp = Expediente {
            court: Some("Juzgado de lo Social nº 3 de Madrid".to_string()),
            ..expediente()
        };
        let result = merge(&court_template(), &exp, None);
        assert!(result.success);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_manual_override_satisfies_required_variable() {
        let mut manual = HashMap::new();
        manual.insert(
            "JUZGADO".to_string(),
            "Juzgado de lo Social nº 1 de Sevilla".to_string(),
        );
        let result = merge(&court_template(), &expediente(), Some(&manual));
        assert!(result.success);
        let juzgado = result
            .mapped_variables
            .iter()
            .find(|m| m.name == "juzgado")
            .unwrap();
        assert_eq!(juzgado.value, "Juzgado de lo Social nº 1 de Sevilla");
        assert_eq!(juzgado.source, VariableSource::Manual);
    }

    #[test]
    fn test_specific_overrides_beat_generic_table() {
        let result = merge(&court_template(), &expediente(), None);
        let demandante = &result.mapped_variables[0];
        let demandado = &result.mapped_variables[1];
        assert_eq!(demandante.value, "Carlos López");
        assert_eq!(demandante.source, VariableSource::CaseSpecific);
        assert_eq!(demandado.value, "Despido improcedente TechCorp");
        assert_eq!(demandado.source, VariableSource::CaseSpecific);
    }

    #[test]
    fn test_merge_is_idempotent_within_a_day() {
        let mut manual = HashMap::new();
        manual.insert("juzgado".to_string(), "Juzgado nº 2".to_string());
        let first = merge(&court_template(), &expediente(), Some(&manual));
        let second = merge(&court_template(), &expediente(), Some(&manual));
        assert_eq!(first.mapped_variables, second.mapped_variables);
        assert_eq!(first.preview, second.preview);
    }

    #[test]
    fn test_preview_substitutes_resolved_placeholders() {
        let exp = Expediente {
            court: Some("Juzgado de lo Social nº 3 de Madrid".to_string()),
            ..expediente()
        };
        let result = merge(&court_template(), &exp, None);
        assert!(result.preview.contains("Juzgado de lo Social nº 3 de Madrid"));
        assert!(result.preview.contains("Carlos López"));
        // No declared placeholder survives unsubstituted
        for mv in &result.mapped_variables {
            assert!(
                !result.preview.contains(&format!("{{{{{}}}}}", mv.name)),
                "placeholder for '{}' left in preview",
                mv.name
            );
        }
    }
}
