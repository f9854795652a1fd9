//! Court filing body: appearance clause, numbered allegations, petition
//! and signature block.

use expediente_types::expediente::format_amount;
use expediente_types::{Expediente, MappedVariable};

use super::{mapped_value, value_or};
use crate::document::{Alignment, Paragraph, Section, TextRun};

pub(super) fn build(expediente: &Expediente, mapped: &[MappedVariable]) -> Section {
    let court = value_or(mapped, "juzgado", expediente.court.as_deref(), "[JUZGADO]");
    let procedure = value_or(
        mapped,
        "numero_procedimiento",
        expediente.procedure_number.as_deref(),
        "[PROCEDIMIENTO]",
    );
    let client = value_or(
        mapped,
        "nombre_demandante",
        Some(expediente.client.as_str()),
        "[CLIENTE]",
    );
    let opposing = value_or(mapped, "nombre_demandado", None, "[PARTE CONTRARIA]");
    let lawyer = value_or(
        mapped,
        "abogado_asignado",
        expediente.team.lawyer.as_ref().map(|m| m.name.as_str()),
        "[ABOGADO]",
    );
    let facts = mapped_value(mapped, "descripcion")
        .or(expediente.description.as_deref())
        .unwrap_or("Los hechos se expondrán en el acto de la vista.");
    let total = expediente.finance.total.map(format_amount);
    let amount = value_or(mapped, "importe_total", total.as_deref(), "[PENDIENTE]");

    let mut paragraphs = vec![
        Paragraph::new(vec![TextRun::bold(format!("AL {}", court))], Alignment::Center),
        Paragraph::new(
            vec![
                TextRun::bold("Procedimiento: "),
                TextRun::plain(procedure),
            ],
            Alignment::Left,
        ),
        Paragraph::centered_heading("DILIGENCIA"),
        Paragraph::justified(format!(
            "D./Dña. {}, comparece ante este Juzgado frente a {} y, como mejor proceda en Derecho, DICE:",
            client, opposing
        )),
        Paragraph::justified(format!("PRIMERO.- {}", facts)),
        Paragraph::justified(format!(
            "SEGUNDO.- La cuantía del presente procedimiento asciende a {}.",
            amount
        )),
        Paragraph::new(
            vec![
                TextRun::bold("SUPLICO AL JUZGADO"),
                TextRun::plain(
                    " que tenga por presentado este escrito, lo admita y acuerde de conformidad con lo solicitado.",
                ),
            ],
            Alignment::Justified,
        ),
    ];

    // Signature block, right aligned
    paragraphs.push(Paragraph::new(
        vec![TextRun::plain(lawyer)],
        Alignment::Right,
    ));
    paragraphs.push(Paragraph::new(
        vec![TextRun::plain("Abogado/a")],
        Alignment::Right,
    ));

    Section { paragraphs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expediente_types::{Team, TeamMember, VariableSource};
    use pretty_assertions::assert_eq;

    fn mv(name: &str, value: &str) -> MappedVariable {
        MappedVariable {
            name: name.to_string(),
            value: value.to_string(),
            source: VariableSource::CaseSpecific,
            description: name.to_string(),
        }
    }

    fn expediente() -> Expediente {
        Expediente {
            id: "EXP-1".to_string(),
            title: "Despido improcedente TechCorp".to_string(),
            client: "Carlos López".to_string(),
            court: Some("Juzgado de lo Social nº 3".to_string()),
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
    fn test_court_name_is_centered_and_bold() {
        let section = build(&expediente(), &[]);
        let first = &section.paragraphs[0];
        assert_eq!(first.alignment, Alignment::Center);
        assert!(first.runs[0].bold);
        assert_eq!(first.text(), "AL Juzgado de lo Social nº 3");
    }

    #[test]
    fn test_body_clauses_are_justified_and_numbered() {
        let section = build(&expediente(), &[mv("descripcion", "Hechos probados.")]);
        let primero = section
            .paragraphs
            .iter()
            .find(|p| p.text().starts_with("PRIMERO.-"))
            .unwrap();
        assert_eq!(primero.alignment, Alignment::Justified);
        assert!(primero.text().contains("Hechos probados."));
        assert!(section
            .paragraphs
            .iter()
            .any(|p| p.text().starts_with("SEGUNDO.-")));
    }

    #[test]
    fn test_petition_clause_is_bolded() {
        let section = build(&expediente(), &[]);
        let petition = section
            .paragraphs
            .iter()
            .find(|p| p.text().contains("SUPLICO AL JUZGADO"))
            .unwrap();
        assert!(petition.runs[0].bold);
    }

    #[test]
    fn test_signature_block_is_right_aligned() {
        let section = build(&expediente(), &[]);
        let last_two: Vec<_> = section.paragraphs.iter().rev().take(2).collect();
        assert!(last_two.iter().all(|p| p.alignment == Alignment::Right));
        assert!(last_two.iter().any(|p| p.text() == "María García"));
    }

    #[test]
    fn test_missing_values_degrade_to_placeholders() {
        let section = build(&Expediente::default(), &[]);
        let text: String = section
            .paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("[JUZGADO]"));
        assert!(text.contains("[PROCEDIMIENTO]"));
        assert!(text.contains("[PARTE CONTRARIA]"));
        assert!(text.contains("[ABOGADO]"));
        assert!(text.contains("[PENDIENTE]"));
    }
}
