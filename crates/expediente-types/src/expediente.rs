use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::short_date;

/// A member of the legal team assigned to a case
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    pub lawyer: Option<TeamMember>,
    pub supervisor: Option<TeamMember>,
}

/// Financial figures of a case, all in euros
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Finance {
    pub total: Option<f64>,
    pub expenses: Option<f64>,
    pub billed: Option<f64>,
    pub collected: Option<f64>,
    pub pending: Option<f64>,
}

/// A case record ("expediente"): the data source templates are merged
/// against. `None` and empty-string fields are equivalent for resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expediente {
    pub id: String,
    pub title: String,
    pub client: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub case_type: Option<String>,
    pub status: Option<String>,
    pub opened_on: Option<NaiveDate>,
    pub closed_on: Option<NaiveDate>,
    pub description: Option<String>,
    /// Completion estimate, 0-100
    pub progress: Option<u8>,
    pub court: Option<String>,
    pub procedure_number: Option<String>,
    #[serde(default)]
    pub finance: Finance,
    #[serde(default)]
    pub team: Team,
}

/// The known field paths of a case record.
///
/// Replaces dotted path strings ("team.lawyer.name") with a closed enum so
/// the mapping tables are checked at compile time while keeping the
/// never-throw-on-missing lookup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseField {
    Id,
    Title,
    Client,
    ClientEmail,
    ClientPhone,
    CaseType,
    Status,
    OpenedOn,
    ClosedOn,
    Description,
    Court,
    ProcedureNumber,
    FinanceTotal,
    FinanceExpenses,
    FinanceBilled,
    FinanceCollected,
    FinancePending,
    LawyerName,
    LawyerEmail,
    SupervisorName,
    SupervisorEmail,
}

impl Expediente {
    /// Resolve a field to its display string.
    ///
    /// Returns `None` for missing nested data and for empty strings, so a
    /// blank field falls through to the next resolution strategy instead of
    /// producing a silently blank document.
    pub fn field(&self, field: CaseField) -> Option<String> {
        let value = match field {
            CaseField::Id => Some(self.id.clone()),
            CaseField::Title => Some(self.title.clone()),
            CaseField::Client => Some(self.client.clone()),
            CaseField::ClientEmail => self.client_email.clone(),
            CaseField::ClientPhone => self.client_phone.clone(),
            CaseField::CaseType => self.case_type.clone(),
            CaseField::Status => self.status.clone(),
            CaseField::OpenedOn => self.opened_on.map(short_date),
            CaseField::ClosedOn => self.closed_on.map(short_date),
            CaseField::Description => self.description.clone(),
            CaseField::Court => self.court.clone(),
            CaseField::ProcedureNumber => self.procedure_number.clone(),
            CaseField::FinanceTotal => self.finance.total.map(format_amount),
            CaseField::FinanceExpenses => self.finance.expenses.map(format_amount),
            CaseField::FinanceBilled => self.finance.billed.map(format_amount),
            CaseField::FinanceCollected => self.finance.collected.map(format_amount),
            CaseField::FinancePending => self.finance.pending.map(format_amount),
            CaseField::LawyerName => self.team.lawyer.as_ref().map(|m| m.name.clone()),
            CaseField::LawyerEmail => self.team.lawyer.as_ref().map(|m| m.email.clone()),
            CaseField::SupervisorName => self.team.supervisor.as_ref().map(|m| m.name.clone()),
            CaseField::SupervisorEmail => self.team.supervisor.as_ref().map(|m| m.email.clone()),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Format an amount in euros with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{:.2} €", amount)
}
