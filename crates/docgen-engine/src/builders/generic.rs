//! Generic body: one "label: value" paragraph per mapped variable.

use expediente_types::MappedVariable;

use crate::document::{Alignment, Paragraph, Section, TextRun};

const NOT_SPECIFIED: &str = "[No especificado]";

pub(super) fn build(mapped: &[MappedVariable]) -> Section {
    let paragraphs = mapped
        .iter()
        .map(|mv| {
            let value = if mv.value.trim().is_empty() {
                NOT_SPECIFIED
            } else {
                mv.value.as_str()
            };
            Paragraph::new(
                vec![
                    TextRun::bold(format!("{}: ", mv.description)),
                    TextRun::plain(value),
                ],
                Alignment::Left,
            )
        })
        .collect();
    Section { paragraphs }
}
