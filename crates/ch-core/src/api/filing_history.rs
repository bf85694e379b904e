use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FilingHistoryItem {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub filing_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub barcode: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FilingHistoryList {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub items: Vec<FilingHistoryItem>,
    #[serde(default)]
    pub start_index: i64,
    #[serde(default)]
    pub items_per_page: i64,
}
