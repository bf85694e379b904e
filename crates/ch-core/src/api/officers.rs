use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::company::RegisteredOffice;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Officer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub officer_role: String,
    #[serde(default)]
    pub appointed_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resigned_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nationality: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub occupation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_of_residence: String,
    #[serde(default)]
    pub address: RegisteredOffice,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OfficerList {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub active_count: i64,
    #[serde(default)]
    pub resigned_count: i64,
    #[serde(default)]
    pub items: Vec<Officer>,
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub items_per_page: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OfficerSearchResult {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub items: Vec<Officer>,
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub items_per_page: i64,
}
