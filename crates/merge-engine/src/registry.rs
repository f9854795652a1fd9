//! Built-in template registry.
//!
//! The firm's stock templates with their declared variables. Static config:
//! there is no persistence, callers get fresh copies per call.

use expediente_types::{Template, TemplateCategory, TemplateVariable, VariableType};

fn var(
    name: &str,
    description: &str,
    var_type: VariableType,
    required: bool,
    default_value: Option<&str>,
) -> TemplateVariable {
    TemplateVariable {
        name: name.to_string(),
        description: description.to_string(),
        var_type,
        required,
        default_value: default_value.map(str::to_string),
    }
}

/// List the built-in templates
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "PLANT-001".to_string(),
            title: "Escrito de personación".to_string(),
            description: "Personación del letrado en procedimiento judicial".to_string(),
            category: TemplateCategory::Court,
            variables: vec![
                var("juzgado", "Juzgado destinatario", VariableType::Text, true, None),
                var(
                    "numero_procedimiento",
                    "Número de procedimiento",
                    VariableType::Text,
                    true,
                    None,
                ),
                var("nombre_cliente", "Nombre del cliente", VariableType::Text, true, None),
                var(
                    "abogado_asignado",
                    "Letrado que suscribe",
                    VariableType::Text,
                    false,
                    None,
                ),
                var("fecha_hoy", "Fecha del escrito", VariableType::Date, false, None),
            ],
        },
        Template {
            id: "PLANT-002".to_string(),
            title: "Demanda por despido improcedente".to_string(),
            description: "Demanda laboral frente a la empresa demandada".to_string(),
            category: TemplateCategory::Court,
            variables: vec![
                var(
                    "nombre_demandante",
                    "Nombre del demandante",
                    VariableType::Text,
                    true,
                    None,
                ),
                var(
                    "nombre_demandado",
                    "Nombre del demandado",
                    VariableType::Text,
                    true,
                    None,
                ),
                var("juzgado", "Juzgado de lo Social", VariableType::Text, true, None),
                var(
                    "numero_procedimiento",
                    "Número de autos",
                    VariableType::Text,
                    false,
                    None,
                ),
                var(
                    "importe_total",
                    "Cuantía reclamada",
                    VariableType::Currency,
                    false,
                    None,
                ),
                var("fecha_hoy", "Fecha de presentación", VariableType::Date, false, None),
            ],
        },
        Template {
            id: "PLANT-003".to_string(),
            title: "Recurso de reposición".to_string(),
            description: "Recurso contra resolución del propio órgano".to_string(),
            category: TemplateCategory::Court,
            variables: vec![
                var("juzgado", "Órgano judicial", VariableType::Text, true, None),
                var(
                    "parte_recurrente",
                    "Parte recurrente",
                    VariableType::Text,
                    true,
                    None,
                ),
                var(
                    "resolucion_recurrida",
                    "Resolución recurrida",
                    VariableType::Text,
                    true,
                    None,
                ),
                var("fecha_hoy", "Fecha del recurso", VariableType::Date, false, None),
            ],
        },
        Template {
            id: "CONT-001".to_string(),
            title: "Contrato de prestación de servicios".to_string(),
            description: "Hoja de encargo profesional con el cliente".to_string(),
            category: TemplateCategory::Contract,
            variables: vec![
                var("nombre_cliente", "Nombre del cliente", VariableType::Text, true, None),
                var(
                    "tipo_contrato",
                    "Tipo de contrato",
                    VariableType::Text,
                    false,
                    Some("prestación de servicios jurídicos"),
                ),
                var("importe_total", "Honorarios totales", VariableType::Currency, true, None),
                var(
                    "importe_pendiente",
                    "Importe pendiente",
                    VariableType::Currency,
                    false,
                    None,
                ),
                var("fecha_hoy", "Fecha de la firma", VariableType::Date, false, None),
            ],
        },
        Template {
            id: "COM-001".to_string(),
            title: "Comunicación de estado del expediente".to_string(),
            description: "Carta informativa periódica al cliente".to_string(),
            category: TemplateCategory::Communication,
            variables: vec![
                var("nombre_cliente", "Nombre del cliente", VariableType::Text, true, None),
                var("cliente_email", "Email del cliente", VariableType::Email, false, None),
                var(
                    "numero_expediente",
                    "Número de expediente",
                    VariableType::Text,
                    true,
                    None,
                ),
                var("estado", "Estado actual", VariableType::Text, false, Some("en tramitación")),
                var("abogado_asignado", "Letrado asignado", VariableType::Text, false, None),
                var("fecha_hoy", "Fecha de la comunicación", VariableType::Date, false, None),
            ],
        },
        Template {
            id: "GEN-001".to_string(),
            title: "Resumen de expediente".to_string(),
            description: "Ficha resumen para uso interno".to_string(),
            category: TemplateCategory::Other,
            variables: vec![
                var(
                    "numero_expediente",
                    "Número de expediente",
                    VariableType::Text,
                    true,
                    None,
                ),
                var("titulo_expediente", "Asunto", VariableType::Text, false, None),
                var("nombre_cliente", "Cliente", VariableType::Text, false, None),
                var("estado", "Estado", VariableType::Text, false, None),
                var(
                    "importe_pendiente",
                    "Importe pendiente de cobro",
                    VariableType::Currency,
                    false,
                    None,
                ),
            ],
        },
    ]
}

/// Find a built-in template by id
pub fn find_template(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}
