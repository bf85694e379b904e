use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::company::RegisteredOffice;

/// Person with significant control.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Psc {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub natures_of_control: Vec<String>,
    #[serde(default)]
    pub notified_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ceased_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nationality: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_of_residence: String,
    #[serde(default)]
    pub address: RegisteredOffice,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PscList {
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub active_count: i64,
    #[serde(default)]
    pub ceased_count: i64,
    #[serde(default)]
    pub items: Vec<Psc>,
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub items_per_page: i64,
}
