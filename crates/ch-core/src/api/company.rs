use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CompanyProfile {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_number: String,
    #[serde(default)]
    pub company_status: String,
    #[serde(default, rename = "type")]
    pub company_type: String,
    #[serde(default)]
    pub date_of_creation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_of_cessation: String,
    #[serde(default)]
    pub jurisdiction: String,
    #[serde(default, rename = "registered_office_address")]
    pub registered_office: RegisteredOffice,
    #[serde(default)]
    pub sic_codes: Vec<String>,
    #[serde(default)]
    pub has_charges: bool,
    #[serde(default)]
    pub has_insolvency_history: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Accounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_statement: Option<ConfirmationStatement>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

/// Postal address as the registry returns it. Also used for officer and PSC
/// correspondence addresses.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RegisteredOffice {
    #[serde(default)]
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line_2: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
}

impl RegisteredOffice {
    /// Short single-line form: first lines, locality and postcode.
    pub fn summary_line(&self) -> String {
        join_non_empty(&[
            &self.address_line_1,
            &self.address_line_2,
            &self.locality,
            &self.postal_code,
        ])
    }

    /// Every populated field, in postal order.
    pub fn full_line(&self) -> String {
        join_non_empty(&[
            &self.address_line_1,
            &self.address_line_2,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ])
    }
}

fn join_non_empty(parts: &[&String]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Accounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accounts: Option<LastAccounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounting_reference_date: Option<AccountingReferenceDate>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LastAccounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub made_up_to: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub accounts_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AccountingReferenceDate {
    pub day: String,
    pub month: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConfirmationStatement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_made_up_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CompanySearchResult {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub items: Vec<CompanyProfile>,
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub items_per_page: i64,
}
