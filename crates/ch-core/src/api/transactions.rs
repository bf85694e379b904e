use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-side unit of work that groups filings until it is closed.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub company_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, String>,
}

#[derive(Serialize)]
pub struct CreateTransactionRequest {
    pub company_number: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct TransactionStatusUpdate {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RegisteredOfficeAddressFiling {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line_2: String,
    pub locality: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct RegisteredEmailAddressFiling {
    pub registered_email_address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ValidationStatus {
    #[serde(rename = "is_valid", alias = "valid")]
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_filing_omits_empty_optional_lines() {
        let filing = RegisteredOfficeAddressFiling {
            address_line_1: "123 New Street".to_string(),
            locality: "London".to_string(),
            postal_code: "SW1A 1AA".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filing).expect("encode"),
            json!({
                "address_line_1": "123 New Street",
                "locality": "London",
                "postal_code": "SW1A 1AA"
            })
        );
    }

    #[test]
    fn validation_status_reads_wire_and_short_names() {
        let wire: ValidationStatus =
            serde_json::from_value(json!({"is_valid": false, "errors": ["postal_code is required"]}))
                .expect("wire");
        assert!(!wire.valid);
        assert_eq!(wire.errors, vec!["postal_code is required".to_string()]);

        let short: ValidationStatus =
            serde_json::from_value(json!({"valid": true})).expect("short");
        assert!(short.valid);
        assert!(short.errors.is_empty());
    }
}
