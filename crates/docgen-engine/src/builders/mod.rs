//! Category-specific document builders.
//!
//! One independent builder per template category, dispatched over the
//! category enum. All of them share the header/footer and the same failure
//! semantics: a missing value degrades to a bracketed placeholder, the
//! builder itself never fails.

mod communication;
mod contract;
mod court;
mod generic;

use chrono::Local;
use expediente_types::dates::long_date;
use expediente_types::{Expediente, MappedVariable, Template, TemplateCategory};
use tracing::debug;

use crate::document::{Alignment, DocumentTree, Paragraph, Section, TextRun};

/// Build the structured document for a merged template.
///
/// Consumes the mapped variables produced by the merge engine; values the
/// builders need but the merge did not produce fall back to raw case fields
/// and then to literal placeholders.
pub fn build_document(
    template: &Template,
    expediente: &Expediente,
    mapped: &[MappedVariable],
) -> DocumentTree {
    let body = match template.category {
        TemplateCategory::Court => court::build(expediente, mapped),
        TemplateCategory::Contract => contract::build(template, expediente, mapped),
        TemplateCategory::Communication => communication::build(expediente, mapped),
        TemplateCategory::Other => generic::build(mapped),
    };

    let mut sections = vec![header_section(template, expediente, mapped)];
    sections.push(body);
    sections.push(footer_section());

    debug!(
        template = %template.id,
        category = ?template.category,
        sections = sections.len(),
        "document tree built"
    );

    DocumentTree {
        title: template.title.clone(),
        sections,
    }
}

/// Resolved value of a mapped variable, skipping blanks and bracketed
/// placeholders so the builders can apply their own fallbacks
pub(crate) fn mapped_value<'a>(mapped: &'a [MappedVariable], name: &str) -> Option<&'a str> {
    mapped
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .map(|m| m.value.as_str())
        .filter(|v| !v.trim().is_empty() && !(v.starts_with('[') && v.ends_with(']')))
}

/// Mapped value, then a raw fallback, then a literal placeholder
pub(crate) fn value_or<'a>(
    mapped: &'a [MappedVariable],
    name: &str,
    fallback: Option<&'a str>,
    placeholder: &'a str,
) -> &'a str {
    mapped_value(mapped, name)
        .or(fallback)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(placeholder)
}

fn header_section(
    template: &Template,
    expediente: &Expediente,
    mapped: &[MappedVariable],
) -> Section {
    let id = value_or(
        mapped,
        "numero_expediente",
        Some(expediente.id.as_str()),
        "[EXPEDIENTE]",
    );
    let client = value_or(
        mapped,
        "nombre_cliente",
        Some(expediente.client.as_str()),
        "[CLIENTE]",
    );
    let today = long_date(Local::now().date_naive());
    let date = value_or(mapped, "fecha_hoy", Some(today.as_str()), "[FECHA]");

    Section {
        paragraphs: vec![
            Paragraph::centered_heading(template.title.to_uppercase()),
            Paragraph::new(
                vec![TextRun::bold("Expediente: "), TextRun::plain(id)],
                Alignment::Left,
            ),
            Paragraph::new(
                vec![TextRun::bold("Cliente: "), TextRun::plain(client)],
                Alignment::Left,
            ),
            Paragraph::new(
                vec![TextRun::bold("Fecha: "), TextRun::plain(date)],
                Alignment::Left,
            ),
        ],
    }
}

fn footer_section() -> Section {
    let stamp = Local::now().format("%d/%m/%Y %H:%M");
    Section {
        paragraphs: vec![Paragraph::new(
            vec![TextRun::plain(format!(
                "Documento generado automáticamente el {}. Pendiente de revisión por el letrado responsable.",
                stamp
            ))],
            Alignment::Left,
        )],
    }
}
