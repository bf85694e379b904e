use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use ch_core::{
    CreateTransactionRequest, RegisteredEmailAddressFiling, RegisteredOfficeAddressFiling,
    Transaction, TransactionStatusUpdate, ValidationStatus, TRANSACTION_STATUS_CLOSED,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::modules::system::ApiError;

/// Write surface of the registry used by filings.
#[async_trait]
pub(crate) trait FilingApi: Send + Sync {
    async fn create_transaction(
        &self,
        company_number: &str,
        description: &str,
    ) -> anyhow::Result<Transaction>;

    async fn get_transaction(&self, transaction_id: &str) -> anyhow::Result<Transaction>;

    async fn file_registered_office_address(
        &self,
        transaction_id: &str,
        address: &RegisteredOfficeAddressFiling,
    ) -> anyhow::Result<()>;

    async fn file_registered_email_address(
        &self,
        transaction_id: &str,
        email: &RegisteredEmailAddressFiling,
    ) -> anyhow::Result<()>;

    async fn get_address_validation(&self, transaction_id: &str)
        -> anyhow::Result<ValidationStatus>;

    async fn close_transaction(&self, transaction_id: &str) -> anyhow::Result<Transaction>;
}

pub(crate) struct FilingClient<'a> {
    client: &'a reqwest::Client,
    base_url: String,
    access_token: String,
}

impl<'a> FilingClient<'a> {
    pub(crate) fn new(client: &'a reqwest::Client, base_url: &str, access_token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> anyhow::Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.access_token);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };

        debug!(method = %method, url = %url, "http request");
        let start = Instant::now();
        let response = builder.send().await.context("request failed")?;
        let status = response.status();
        debug!(
            method = %method,
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        let bytes = response.bytes().await.context("read response")?;
        if status.as_u16() >= 400 {
            return Err(ApiError {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }
            .into());
        }
        if bytes.is_empty() {
            return Ok(None);
        }
        let decoded = serde_json::from_slice(&bytes).context("decode response")?;
        Ok(Some(decoded))
    }
}

#[async_trait]
impl FilingApi for FilingClient<'_> {
    async fn create_transaction(
        &self,
        company_number: &str,
        description: &str,
    ) -> anyhow::Result<Transaction> {
        let payload = CreateTransactionRequest {
            company_number: company_number.to_string(),
            description: description.to_string(),
        };
        let created: Option<Transaction> =
            self.send(Method::POST, "/transactions", Some(&payload)).await?;
        Ok(created.unwrap_or_default())
    }

    async fn get_transaction(&self, transaction_id: &str) -> anyhow::Result<Transaction> {
        let path = format!("/transactions/{transaction_id}");
        let found: Option<Transaction> = self.send::<(), _>(Method::GET, &path, None).await?;
        found.ok_or_else(|| anyhow::anyhow!("empty transaction response"))
    }

    async fn file_registered_office_address(
        &self,
        transaction_id: &str,
        address: &RegisteredOfficeAddressFiling,
    ) -> anyhow::Result<()> {
        let path = format!("/transactions/{transaction_id}/registered-office-address");
        self.send::<_, serde_json::Value>(Method::POST, &path, Some(address))
            .await?;
        Ok(())
    }

    async fn file_registered_email_address(
        &self,
        transaction_id: &str,
        email: &RegisteredEmailAddressFiling,
    ) -> anyhow::Result<()> {
        let path = format!("/transactions/{transaction_id}/registered-email-address");
        self.send::<_, serde_json::Value>(Method::POST, &path, Some(email))
            .await?;
        Ok(())
    }

    async fn get_address_validation(
        &self,
        transaction_id: &str,
    ) -> anyhow::Result<ValidationStatus> {
        let path =
            format!("/transactions/{transaction_id}/registered-office-address/validation-status");
        let status: Option<ValidationStatus> =
            self.send::<(), _>(Method::GET, &path, None).await?;
        status.ok_or_else(|| anyhow::anyhow!("empty validation response"))
    }

    async fn close_transaction(&self, transaction_id: &str) -> anyhow::Result<Transaction> {
        let path = format!("/transactions/{transaction_id}");
        let payload = TransactionStatusUpdate {
            status: TRANSACTION_STATUS_CLOSED.to_string(),
        };
        let closed: Option<Transaction> = self.send(Method::PUT, &path, Some(&payload)).await?;
        Ok(closed.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn create_transaction_uses_bearer_token() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/transactions")
            .match_header("authorization", "Bearer access-1")
            .match_body(Matcher::Json(json!({
                "company_number": "00445790",
                "description": "Change of registered office address"
            })))
            .with_status(201)
            .with_body(json!({"id": "txn-1", "status": "open"}).to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = FilingClient::new(&client, &server.url(), "access-1".to_string());
        let txn = api
            .create_transaction("00445790", "Change of registered office address")
            .await?;
        assert_eq!(txn.id, "txn-1");
        assert_eq!(txn.status, "open");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn client_errors_become_api_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/transactions/txn-1/registered-email-address")
            .with_status(422)
            .with_body(r#"{"errors":["bad email"]}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = FilingClient::new(&client, &server.url(), "t".to_string());
        let err = api
            .file_registered_email_address(
                "txn-1",
                &RegisteredEmailAddressFiling {
                    registered_email_address: "nope".to_string(),
                },
            )
            .await
            .expect_err("rejected");
        let api_err = err.downcast_ref::<ApiError>().expect("api error");
        assert_eq!(api_err.status, 422);
        assert!(api_err.body.contains("bad email"));
    }

    #[tokio::test]
    async fn close_sends_closed_status() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/transactions/txn-9")
            .match_body(Matcher::Json(json!({"status": "closed"})))
            .with_status(200)
            .with_body(json!({"id": "txn-9", "status": "closed"}).to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = FilingClient::new(&client, &server.url(), "t".to_string());
        let txn = api.close_transaction("txn-9").await?;
        assert_eq!(txn.status, "closed");
        mock.assert_async().await;
        Ok(())
    }
}
