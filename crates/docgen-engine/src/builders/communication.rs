//! Client communication body: salutation, case reference, closing and
//! signature.

use expediente_types::{Expediente, MappedVariable};

use super::value_or;
use crate::document::{Alignment, Paragraph, Section, TextRun};

pub(super) fn build(expediente: &Expediente, mapped: &[MappedVariable]) -> Section {
    let client = value_or(
        mapped,
        "nombre_cliente",
        Some(expediente.client.as_str()),
        "[CLIENTE]",
    );
    let case_id = value_or(
        mapped,
        "numero_expediente",
        Some(expediente.id.as_str()),
        "[EXPEDIENTE]",
    );
    let matter = value_or(
        mapped,
        "titulo_expediente",
        Some(expediente.title.as_str()),
        "[ASUNTO]",
    );
    let status = value_or(
        mapped,
        "estado",
        expediente.status.as_deref(),
        "en tramitación",
    );
    let lawyer = value_or(
        mapped,
        "abogado_asignado",
        expediente.team.lawyer.as_ref().map(|m| m.name.as_str()),
        "[ABOGADO]",
    );
    let lawyer_email = value_or(
        mapped,
        "abogado_email",
        expediente.team.lawyer.as_ref().map(|m| m.email.as_str()),
        "[EMAIL]",
    );

    Section {
        paragraphs: vec![
            Paragraph::plain(format!("Estimado/a {}:", client)),
            Paragraph::justified(format!(
                "Nos ponemos en contacto con usted en relación con su expediente {} (\"{}\"), que actualmente se encuentra {}.",
                case_id, matter, status
            )),
            Paragraph::justified(
                "Le mantendremos informado/a de cualquier novedad relevante. Quedamos a su disposición para ampliar la información que precise.",
            ),
            Paragraph::plain("Sin otro particular, reciba un cordial saludo."),
            Paragraph::new(vec![TextRun::bold(lawyer)], Alignment::Left),
            Paragraph::plain(lawyer_email),
        ],
    }
}
