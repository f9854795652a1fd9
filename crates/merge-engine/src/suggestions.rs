//! Advisory variable-name suggestions per template category, used by
//! editor UIs to prompt which placeholders to insert. Not validated
//! against the resolver.

use expediente_types::TemplateCategory;

pub const COURT_SUGGESTIONS: &[&str] = &[
    "juzgado",
    "numero_procedimiento",
    "nombre_demandante",
    "nombre_demandado",
    "abogado_asignado",
    "descripcion",
    "fecha_hoy",
];

pub const CONTRACT_SUGGESTIONS: &[&str] = &[
    "nombre_cliente",
    "tipo_contrato",
    "tipo_expediente",
    "titulo_expediente",
    "importe_total",
    "importe_pendiente",
    "fecha_hoy",
];

pub const COMMUNICATION_SUGGESTIONS: &[&str] = &[
    "nombre_cliente",
    "cliente_email",
    "numero_expediente",
    "titulo_expediente",
    "estado",
    "abogado_asignado",
    "abogado_email",
    "fecha_hoy",
];

pub const GENERIC_SUGGESTIONS: &[&str] = &[
    "numero_expediente",
    "titulo_expediente",
    "nombre_cliente",
    "estado",
    "fecha_hoy",
];

/// Recommended placeholder names for a template category
pub fn suggested_variables(category: TemplateCategory) -> &'static [&'static str] {
    match category {
        TemplateCategory::Court => COURT_SUGGESTIONS,
        TemplateCategory::Contract => CONTRACT_SUGGESTIONS,
        TemplateCategory::Communication => COMMUNICATION_SUGGESTIONS,
        TemplateCategory::Other => GENERIC_SUGGESTIONS,
    }
}
