//! Static mapping tables from variable names to case-record fields.
//!
//! Two layers: a generic table shared by every template, and per-template
//! override tables keyed by template id. Both are matched case-insensitively
//! and both are config, not data — adding a synonym is a table edit.

use expediente_types::CaseField;

/// Which part of the case record a generic mapping reads from. Court-group
/// hits are reported as case-specific matches, the rest as case-general.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceGroup {
    Case,
    Finance,
    Team,
    Court,
}

pub struct GenericMapping {
    /// Accepted variable-name variants for this field
    pub names: &'static [&'static str],
    pub field: CaseField,
    pub group: SourceGroup,
}

/// Shared variable-name → field table. Name variants cover the spellings
/// used across the firm's stock templates.
pub const GENERIC_MAPPINGS: &[GenericMapping] = &[
    GenericMapping {
        names: &["numero_expediente", "num_expediente", "expediente", "referencia"],
        field: CaseField::Id,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["titulo_expediente", "titulo", "asunto"],
        field: CaseField::Title,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["nombre_cliente", "cliente"],
        field: CaseField::Client,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["cliente_email", "email_cliente", "correo_cliente"],
        field: CaseField::ClientEmail,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["cliente_telefono", "telefono_cliente"],
        field: CaseField::ClientPhone,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["tipo_expediente", "tipo_caso", "materia"],
        field: CaseField::CaseType,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["estado", "estado_expediente"],
        field: CaseField::Status,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["fecha_apertura", "fecha_inicio"],
        field: CaseField::OpenedOn,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["fecha_cierre"],
        field: CaseField::ClosedOn,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["descripcion", "descripcion_caso", "hechos"],
        field: CaseField::Description,
        group: SourceGroup::Case,
    },
    // The firm's client may be plaintiff or defendant; templates that know
    // better redirect these via their override table
    GenericMapping {
        names: &["nombre_demandante", "demandante"],
        field: CaseField::Client,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["nombre_demandado", "demandado"],
        field: CaseField::Client,
        group: SourceGroup::Case,
    },
    GenericMapping {
        names: &["juzgado", "tribunal", "organo_judicial"],
        field: CaseField::Court,
        group: SourceGroup::Court,
    },
    GenericMapping {
        names: &["numero_procedimiento", "num_procedimiento", "autos"],
        field: CaseField::ProcedureNumber,
        group: SourceGroup::Court,
    },
    GenericMapping {
        names: &["importe_total", "importe", "cuantia"],
        field: CaseField::FinanceTotal,
        group: SourceGroup::Finance,
    },
    GenericMapping {
        names: &["importe_gastos", "gastos"],
        field: CaseField::FinanceExpenses,
        group: SourceGroup::Finance,
    },
    GenericMapping {
        names: &["importe_facturado", "facturado"],
        field: CaseField::FinanceBilled,
        group: SourceGroup::Finance,
    },
    GenericMapping {
        names: &["importe_cobrado", "cobrado"],
        field: CaseField::FinanceCollected,
        group: SourceGroup::Finance,
    },
    GenericMapping {
        names: &["importe_pendiente", "pendiente"],
        field: CaseField::FinancePending,
        group: SourceGroup::Finance,
    },
    GenericMapping {
        names: &["abogado_asignado", "abogado", "letrado"],
        field: CaseField::LawyerName,
        group: SourceGroup::Team,
    },
    GenericMapping {
        names: &["abogado_email", "email_abogado"],
        field: CaseField::LawyerEmail,
        group: SourceGroup::Team,
    },
    GenericMapping {
        names: &["supervisor", "socio_responsable"],
        field: CaseField::SupervisorName,
        group: SourceGroup::Team,
    },
    GenericMapping {
        names: &["supervisor_email", "email_supervisor"],
        field: CaseField::SupervisorEmail,
        group: SourceGroup::Team,
    },
];

/// Per-template redirects. PLANT-002 is the labor dismissal claim: the
/// client sues, and the employer is named in the case title.
pub const TEMPLATE_OVERRIDES: &[(&str, &[(&str, CaseField)])] = &[
    (
        "PLANT-002",
        &[
            ("nombre_demandante", CaseField::Client),
            ("nombre_demandado", CaseField::Title),
        ],
    ),
    (
        "PLANT-003",
        &[
            ("parte_recurrente", CaseField::Client),
            ("resolucion_recurrida", CaseField::Title),
        ],
    ),
];

/// Find the generic mapping for a variable name, case-insensitively
pub fn lookup_generic(name: &str) -> Option<&'static GenericMapping> {
    GENERIC_MAPPINGS.iter().find(|mapping| {
        mapping
            .names
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
    })
}

/// Find a template-specific override for (template id, variable name)
pub fn lookup_override(template_id: &str, name: &str) -> Option<CaseField> {
    let (_, table) = TEMPLATE_OVERRIDES
        .iter()
        .find(|(id, _)| *id == template_id)?;
    table
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, field)| *field)
}
