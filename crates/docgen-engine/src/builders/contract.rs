//! Contract body: parties section and numbered clauses.

use expediente_types::expediente::format_amount;
use expediente_types::{Expediente, MappedVariable, Template};

use super::value_or;
use crate::document::{Alignment, Paragraph, Section, TextRun};

pub(super) fn build(
    template: &Template,
    expediente: &Expediente,
    mapped: &[MappedVariable],
) -> Section {
    let client = value_or(
        mapped,
        "nombre_cliente",
        Some(expediente.client.as_str()),
        "[CLIENTE]",
    );
    let lawyer = value_or(
        mapped,
        "abogado_asignado",
        expediente.team.lawyer.as_ref().map(|m| m.name.as_str()),
        "[ABOGADO]",
    );
    let object = value_or(
        mapped,
        "tipo_expediente",
        expediente.case_type.as_deref(),
        "la prestación de servicios jurídicos",
    );
    let matter = value_or(
        mapped,
        "titulo_expediente",
        Some(expediente.title.as_str()),
        "[ASUNTO]",
    );
    let total = expediente.finance.total.map(format_amount);
    let fees = value_or(mapped, "importe_total", total.as_deref(), "[PENDIENTE]");
    let pending_amount = expediente.finance.pending.map(format_amount);
    let pending = value_or(
        mapped,
        "importe_pendiente",
        pending_amount.as_deref(),
        "[PENDIENTE]",
    );

    Section {
        paragraphs: vec![
            Paragraph::centered_heading(template.title.to_uppercase()),
            Paragraph::centered_heading("REUNIDOS"),
            Paragraph::justified(format!(
                "De una parte, D./Dña. {}, en adelante el Cliente.",
                client
            )),
            Paragraph::justified(format!(
                "De otra parte, D./Dña. {}, en nombre y representación del despacho, en adelante el Despacho.",
                lawyer
            )),
            Paragraph::centered_heading("CLÁUSULAS"),
            Paragraph::new(
                vec![
                    TextRun::bold("PRIMERA. Objeto. "),
                    TextRun::plain(format!(
                        "El presente contrato tiene por objeto {} en relación con el asunto \"{}\".",
                        object, matter
                    )),
                ],
                Alignment::Justified,
            ),
            Paragraph::new(
                vec![
                    TextRun::bold("SEGUNDA. Honorarios. "),
                    TextRun::plain(format!(
                        "Los honorarios profesionales ascienden a {}, de los que quedan pendientes de abono {}.",
                        fees, pending
                    )),
                ],
                Alignment::Justified,
            ),
        ],
    }
}
