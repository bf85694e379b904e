use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A mortgage or other security registered against a company.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Charge {
    #[serde(default)]
    pub charge_code: String,
    #[serde(default)]
    pub classification: HashMap<String, String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub delivered_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_on: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub satisfied_on: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub persons_entitled: Vec<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particulars: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

impl Charge {
    pub fn classification_description(&self) -> &str {
        self.classification
            .get("description")
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChargeList {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub items: Vec<Charge>,
    #[serde(default)]
    pub part_satisfied_count: i64,
    #[serde(default)]
    pub satisfied_count: i64,
    #[serde(default)]
    pub unfiltered_count: i64,
}
