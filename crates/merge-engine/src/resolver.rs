//! Variable resolution pipeline.
//!
//! Each strategy either produces a value or passes to the next one; the
//! pipeline order is the contract: manual override, template-specific
//! mapping, generic mapping, derived current date, template default, and
//! finally the empty/placeholder fallback. Missing case data never errors.

use std::collections::HashMap;

use chrono::Local;
use expediente_types::dates::long_date;
use expediente_types::{Expediente, MappedVariable, Template, TemplateVariable, VariableSource};
use tracing::trace;

use crate::mappings::{self, SourceGroup};

pub(crate) struct ResolveCtx<'a> {
    pub template: &'a Template,
    pub expediente: &'a Expediente,
    pub variable: &'a TemplateVariable,
    /// Manual overrides with lowercased keys
    pub manual: &'a HashMap<String, String>,
}

type Strategy = fn(&ResolveCtx) -> Option<(String, VariableSource)>;

/// Ordered resolution strategies; first hit wins. Inserting a new strategy
/// is a table edit, the resolver loop below never changes.
const PIPELINE: &[Strategy] = &[
    manual_override,
    template_override,
    generic_mapping,
    current_date,
    template_default,
];

/// Resolve one template variable against one case record.
///
/// Infallible: when every strategy misses, required variables get a
/// bracketed uppercase placeholder and optional ones an empty string.
pub(crate) fn resolve_variable(ctx: &ResolveCtx) -> MappedVariable {
    for strategy in PIPELINE {
        if let Some((value, source)) = strategy(ctx) {
            trace!(
                variable = %ctx.variable.name,
                source = ?source,
                "variable resolved"
            );
            return mapped(ctx, value, source);
        }
    }

    let value = if ctx.variable.required {
        format!("[{}]", ctx.variable.name.to_uppercase())
    } else {
        String::new()
    };
    trace!(variable = %ctx.variable.name, "variable unresolved");
    mapped(ctx, value, VariableSource::Empty)
}

fn mapped(ctx: &ResolveCtx, value: String, source: VariableSource) -> MappedVariable {
    MappedVariable {
        name: ctx.variable.name.clone(),
        value,
        source,
        description: ctx.variable.description.clone(),
    }
}

/// Caller-supplied values win over everything and are used verbatim,
/// even when blank.
fn manual_override(ctx: &ResolveCtx) -> Option<(String, VariableSource)> {
    ctx.manual
        .get(&ctx.variable.name.to_lowercase())
        .map(|value| (value.clone(), VariableSource::Manual))
}

fn template_override(ctx: &ResolveCtx) -> Option<(String, VariableSource)> {
    let field = mappings::lookup_override(&ctx.template.id, &ctx.variable.name)?;
    let value = ctx.expediente.field(field)?;
    Some((value, VariableSource::CaseSpecific))
}

fn generic_mapping(ctx: &ResolveCtx) -> Option<(String, VariableSource)> {
    let mapping = mappings::lookup_generic(&ctx.variable.name)?;
    let value = ctx.expediente.field(mapping.field)?;
    // Court-group hits keep the case-specific tag, matching the behavior
    // downstream consumers already rely on
    let source = match mapping.group {
        SourceGroup::Court => VariableSource::CaseSpecific,
        _ => VariableSource::CaseGeneral,
    };
    Some((value, source))
}

/// Variables that semantically mean "today's date" (Spanish or English)
/// derive the current date in long localized form.
fn current_date(ctx: &ResolveCtx) -> Option<(String, VariableSource)> {
    let name = ctx.variable.name.to_lowercase();
    let mentions_date = name.contains("fecha") || name.contains("date");
    let mentions_today = name.contains("hoy")
        || name.contains("actual")
        || name.contains("today")
        || name.contains("current");
    if mentions_date && mentions_today {
        let today = long_date(Local::now().date_naive());
        Some((today, VariableSource::DerivedDefault))
    } else {
        None
    }
}

fn template_default(ctx: &ResolveCtx) -> Option<(String, VariableSource)> {
    ctx.variable
        .default_value
        .clone()
        .map(|value| (value, VariableSource::TemplateDefault))
}
