use serde::{Deserialize, Serialize};

use super::company::RegisteredOffice;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct InsolvencyCase {
    #[serde(default)]
    pub number: i64,
    #[serde(default, rename = "type")]
    pub case_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<InsolvencyDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub practitioners: Vec<Practitioner>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct InsolvencyDate {
    #[serde(default, rename = "type")]
    pub date_type: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Practitioner {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub address: RegisteredOffice,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct InsolvencyResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cases: Vec<InsolvencyCase>,
}
