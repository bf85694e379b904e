use anyhow::Context;
use ch_core::{CompanyProfile, RegisteredOffice};

use crate::modules::system::ApiClient;

pub(crate) async fn get_company(
    api: &ApiClient<'_>,
    company_number: &str,
) -> anyhow::Result<CompanyProfile> {
    let path = format!("/company/{}", urlencoding::encode(company_number));
    api.get_json(&path, Vec::new())
        .await
        .context("get company")
}

pub(crate) async fn get_registered_office(
    api: &ApiClient<'_>,
    company_number: &str,
) -> anyhow::Result<RegisteredOffice> {
    let path = format!(
        "/company/{}/registered-office-address",
        urlencoding::encode(company_number)
    );
    api.get_json(&path, Vec::new())
        .await
        .context("get address")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn company_profile_is_fetched_with_basic_auth() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/company/00445790")
            // "test-key:" base64 encoded
            .match_header("authorization", "Basic dGVzdC1rZXk6")
            .with_status(200)
            .with_body(
                json!({
                    "company_name": "TESCO PLC",
                    "company_number": "00445790",
                    "company_status": "active",
                    "type": "plc",
                    "registered_office_address": {
                        "address_line_1": "Tesco House",
                        "locality": "Welwyn Garden City",
                        "postal_code": "AL7 1GA"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = ApiClient::new(&client, &server.url(), "test-key".to_string());
        let profile = get_company(&api, "00445790").await?;
        assert_eq!(profile.company_name, "TESCO PLC");
        assert_eq!(profile.company_type, "plc");
        assert_eq!(profile.registered_office.locality, "Welwyn Garden City");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn missing_company_is_labelled() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/company/99999999/registered-office-address")
            .with_status(404)
            .with_body(r#"{"errors":[{"error":"company-profile-not-found"}]}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = ApiClient::new(&client, &server.url(), "k".to_string());
        let err = get_registered_office(&api, "99999999")
            .await
            .expect_err("not found");
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("get address: "));
        assert!(rendered.contains("HTTP 404"));
    }
}
