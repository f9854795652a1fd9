//! Plain-text preview generation.
//!
//! A category-specific skeleton full of `{{name}}` placeholders is wrapped
//! in a header/footer block, then every placeholder whose name matches a
//! declared variable is substituted globally. The skeletons intentionally
//! reference more placeholders than any one template declares; unmatched
//! ones stay literal so an editor can spot them.

use std::collections::HashMap;

use chrono::Local;
use expediente_types::dates::long_date;
use expediente_types::{Expediente, MappedVariable, Template, TemplateCategory};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

const COURT_SKELETON: &str = "\
AL {{juzgado}}

Procedimiento: {{numero_procedimiento}}

D./Dña. {{nombre_demandante}}, representado/a por el/la letrado/a
{{abogado_asignado}}, comparece ante este Juzgado frente a
{{nombre_demandado}} y como mejor proceda en Derecho, DICE:

PRIMERO.- {{descripcion}}

SEGUNDO.- La cuantía reclamada asciende a {{importe_total}}.

SUPLICO AL JUZGADO que tenga por presentado este escrito y acuerde
conforme a lo solicitado.

En {{lugar}}, a {{fecha_hoy}}.
";

const CONTRACT_SKELETON: &str = "\
CONTRATO DE {{tipo_contrato}}

REUNIDOS

De una parte, {{nombre_cliente}} (en adelante, el Cliente).
De otra parte, {{abogado_asignado}}, en nombre y representación del despacho.

CLÁUSULAS

PRIMERA. Objeto. El presente contrato tiene por objeto {{tipo_expediente}}
en relación con el asunto \"{{titulo_expediente}}\".

SEGUNDA. Honorarios. Los honorarios profesionales ascienden a
{{importe_total}}, de los que quedan pendientes {{importe_pendiente}}.

Firmado a {{fecha_hoy}}.
";

const COMMUNICATION_SKELETON: &str = "\
Estimado/a {{nombre_cliente}}:

Nos ponemos en contacto con usted en relación con su expediente
{{numero_expediente}} (\"{{titulo_expediente}}\"), cuyo estado actual es
{{estado}}.

Para cualquier consulta puede dirigirse a {{abogado_asignado}}
({{abogado_email}}).

Sin otro particular, reciba un cordial saludo.

{{fecha_hoy}}
";

/// Render the plain-text preview for a merged template
pub fn render_preview(
    template: &Template,
    expediente: &Expediente,
    mapped: &[MappedVariable],
) -> String {
    let body = match template.category {
        TemplateCategory::Court => COURT_SKELETON.to_string(),
        TemplateCategory::Contract => CONTRACT_SKELETON.to_string(),
        TemplateCategory::Communication => COMMUNICATION_SKELETON.to_string(),
        TemplateCategory::Other => generic_skeleton(mapped),
    };

    let text = format!(
        "{}\n{}\n{}",
        header(template, expediente),
        body,
        footer()
    );
    substitute(&text, mapped)
}

/// Key/value dump for templates outside the three document families
fn generic_skeleton(mapped: &[MappedVariable]) -> String {
    let mut out = String::new();
    for mv in mapped {
        out.push_str(&format!("{}: {{{{{}}}}}\n", mv.description, mv.name));
    }
    out
}

fn header(template: &Template, expediente: &Expediente) -> String {
    format!(
        "{}\n{}\n\nExpediente: {}\nCliente: {}\nFecha: {}\n",
        template.title.to_uppercase(),
        "=".repeat(template.title.chars().count().max(8)),
        expediente.id,
        expediente.client,
        long_date(Local::now().date_naive())
    )
}

fn footer() -> String {
    "---\nDocumento generado automáticamente para su revisión.".to_string()
}

/// Replace every `{{name}}` occurrence, globally and case-insensitively,
/// with the resolved value. Placeholders with no matching declared variable
/// are left as literal text.
///
/// Single scan: substituted values are inserted verbatim and never
/// re-scanned, so a value that happens to contain `{{...}}` stays literal.
fn substitute(text: &str, mapped: &[MappedVariable]) -> String {
    let values: HashMap<String, &str> = mapped
        .iter()
        .map(|mv| (mv.name.to_lowercase(), mv.value.as_str()))
        .collect();

    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let name = caps[1].trim().to_lowercase();
            match values.get(&name) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expediente_types::{TemplateVariable, VariableSource, VariableType};
    use pretty_assertions::assert_eq;

    fn mapped(name: &str, value: &str) -> MappedVariable {
        MappedVariable {
            name: name.to_string(),
            value: value.to_string(),
            source: VariableSource::Manual,
            description: format!("Variable {}", name),
        }
    }

    fn template(category: TemplateCategory) -> Template {
        Template {
            id: "T-1".to_string(),
            title: "Demanda".to_string(),
            description: String::new(),
            category,
            variables: vec![TemplateVariable {
                name: "juzgado".to_string(),
                description: "Juzgado".to_string(),
                var_type: VariableType::Text,
                required: true,
                default_value: None,
            }],
        }
    }

    fn expediente() -> Expediente {
        Expediente {
            id: "EXP-1".to_string(),
            client: "Ana Ruiz".to_string(),
            ..Expediente::default()
        }
    }

    #[test]
    fn test_substitution_is_global_and_case_insensitive() {
        let text = "{{juzgado}} y de nuevo {{JUZGADO}} y {{ juzgado }}";
        let vars = vec![mapped("juzgado", "Juzgado nº 1")];
        assert_eq!(
            substitute(text, &vars),
            "Juzgado nº 1 y de nuevo Juzgado nº 1 y Juzgado nº 1"
        );
    }

    #[test]
    fn test_unmatched_placeholders_stay_literal() {
        let text = "{{juzgado}} / {{lugar}}";
        let vars = vec![mapped("juzgado", "Juzgado nº 1")];
        assert_eq!(substitute(text, &vars), "Juzgado nº 1 / {{lugar}}");
    }

    #[test]
    fn test_substituted_values_are_never_rescanned() {
        // A resolved value containing placeholder syntax is inserted
        // verbatim, not expanded against the other variables
        let text = "{{observaciones}} / {{juzgado}}";
        let vars = vec![
            mapped("observaciones", "pendiente de {{juzgado}}"),
            mapped("juzgado", "Juzgado nº 1"),
        ];
        assert_eq!(
            substitute(text, &vars),
            "pendiente de {{juzgado}} / Juzgado nº 1"
        );
    }

    #[test]
    fn test_values_with_dollar_signs_are_literal() {
        let text = "importe: {{importe_total}}";
        let vars = vec![mapped("importe_total", "$1.000")];
        assert_eq!(substitute(text, &vars), "importe: $1.000");
    }

    #[test]
    fn test_court_preview_carries_header_and_footer() {
        let preview = render_preview(
            &template(TemplateCategory::Court),
            &expediente(),
            &[mapped("juzgado", "Juzgado nº 1")],
        );
        assert!(preview.starts_with("DEMANDA\n"));
        assert!(preview.contains("Expediente: EXP-1"));
        assert!(preview.contains("Cliente: Ana Ruiz"));
        assert!(preview.contains("AL Juzgado nº 1"));
        assert!(preview.contains("SUPLICO AL JUZGADO"));
        assert!(preview.contains("generado automáticamente"));
    }

    #[test]
    fn test_generic_preview_lists_description_per_variable() {
        let preview = render_preview(
            &template(TemplateCategory::Other),
            &expediente(),
            &[mapped("estado", "En curso"), mapped("cuantia", "1.200 €")],
        );
        assert!(preview.contains("Variable estado: En curso"));
        assert!(preview.contains("Variable cuantia: 1.200 €"));
    }
}
