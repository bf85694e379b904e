use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{READ_MAX_ATTEMPTS, READ_RETRY_DELAY_MS};

/// Non-2xx answer from the registry API, carried with its raw body.
#[derive(Debug, thiserror::Error)]
#[error("Companies House API error (HTTP {status}): {body}")]
pub(crate) struct ApiError {
    pub status: u16,
    pub body: String,
}

/// Read-only registry client: API key as Basic auth, retries on 429 and on
/// transport failures.
pub(crate) struct ApiClient<'a> {
    client: &'a reqwest::Client,
    base_url: String,
    api_key: String,
    retry_delay: Duration,
}

impl<'a> ApiClient<'a> {
    pub(crate) fn new(client: &'a reqwest::Client, base_url: &str, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            retry_delay: Duration::from_millis(READ_RETRY_DELAY_MS),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> anyhow::Result<T> {
        let body = self.get_bytes(path, params).await?;
        serde_json::from_slice(&body).context("decode response")
    }

    async fn get_bytes(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> anyhow::Result<Vec<u8>> {
        let mut url = format!("{}{}", self.base_url, path);
        append_params(&mut url, params);

        let mut last_error = None;
        for attempt in 0..READ_MAX_ATTEMPTS {
            let backoff = self.retry_delay * (attempt + 1);
            debug!(method = "GET", url = %url, attempt, "http request");
            let start = Instant::now();
            let response = match self
                .client
                .get(&url)
                .basic_auth(&self.api_key, Some(""))
                .send()
                .await
            {
                Ok(response) => response,
                Err(err) => {
                    warn!(url = %url, attempt, "request failed: {err}");
                    last_error = Some(anyhow::Error::new(err).context("request failed"));
                    tokio::time::sleep(backoff).await;
                    continue;
                }
            };
            let status = response.status();
            debug!(
                method = "GET",
                url = %url,
                status = %status,
                elapsed_ms = start.elapsed().as_millis(),
                "http response"
            );
            let body = response.bytes().await.context("read response")?;

            if status == StatusCode::TOO_MANY_REQUESTS {
                warn!(url = %url, attempt, "rate limited");
                last_error = Some(anyhow::anyhow!("rate limited (429)"));
                tokio::time::sleep(backoff * 2).await;
                continue;
            }
            if !status.is_success() {
                return Err(ApiError {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                }
                .into());
            }
            return Ok(body.to_vec());
        }
        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("request failed")))
    }
}

pub(crate) fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn build_params<const N: usize>(
    pairs: [Option<(String, String)>; N],
) -> Vec<(String, String)> {
    pairs.into_iter().flatten().collect()
}

pub(crate) fn opt_param(key: &str, value: Option<String>) -> Option<(String, String)> {
    value.map(|value| (key.to_string(), value))
}

/// Paging values are only sent when positive.
pub(crate) fn page_param(key: &str, value: i64) -> Option<(String, String)> {
    (value > 0).then(|| (key.to_string(), value.to_string()))
}

pub(crate) fn append_params(url: &mut String, params: Vec<(String, String)>) {
    if params.is_empty() {
        return;
    }
    let query = params
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<String>>()
        .join("&");
    url.push('?');
    url.push_str(&query);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn fast<'a>(client: &'a reqwest::Client, url: &str) -> ApiClient<'a> {
        ApiClient::new(client, url, "key".to_string()).with_retry_delay(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn get_json_sends_basic_auth_and_query() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        // "key:" base64-encoded
        let mock = server
            .mock("GET", "/search/companies")
            .match_header("authorization", "Basic a2V5Og==")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "acme widgets".into()),
                Matcher::UrlEncoded("items_per_page".into(), "5".into()),
            ]))
            .with_status(200)
            .with_body(json!({"total_results": 1}).to_string())
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = fast(&client, &server.url());
        let params = build_params([
            Some(("q".to_string(), "acme widgets".to_string())),
            page_param("items_per_page", 5),
            page_param("start_index", 0),
        ]);
        let body: serde_json::Value = api.get_json("/search/companies", params).await?;
        assert_eq!(body["total_results"], 1);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn rate_limited_requests_are_retried() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let limited = server
            .mock("GET", "/company/00445790")
            .with_status(429)
            .expect(1)
            .create_async()
            .await;
        let ok = server
            .mock("GET", "/company/00445790")
            .with_status(200)
            .with_body(r#"{"company_name":"ACME"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let body: serde_json::Value = fast(&client, &server.url())
            .get_json("/company/00445790", Vec::new())
            .await?;
        assert_eq!(body["company_name"], "ACME");
        limited.assert_async().await;
        ok.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn persistent_rate_limit_gives_up_after_max_attempts() {
        let mut server = Server::new_async().await;
        let limited = server
            .mock("GET", "/company/1")
            .with_status(429)
            .expect(READ_MAX_ATTEMPTS as usize)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fast(&client, &server.url())
            .get_json::<serde_json::Value>("/company/1", Vec::new())
            .await
            .expect_err("rate limited");
        assert!(err.to_string().contains("429"));
        limited.assert_async().await;
    }

    #[tokio::test]
    async fn not_found_is_an_api_error_without_retry() {
        let mut server = Server::new_async().await;
        let missing = server
            .mock("GET", "/company/nope")
            .with_status(404)
            .with_body(r#"{"errors":[{"error":"company-profile-not-found"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = fast(&client, &server.url())
            .get_json::<serde_json::Value>("/company/nope", Vec::new())
            .await
            .expect_err("not found");
        let api_err = err.downcast_ref::<ApiError>().expect("api error");
        assert_eq!(api_err.status, 404);
        assert!(api_err.body.contains("company-profile-not-found"));
        missing.assert_async().await;
    }

    #[test]
    fn append_params_encodes_values() {
        let mut url = "https://example.test/search".to_string();
        append_params(
            &mut url,
            build_params([
                opt_param("q", Some("a&b c".to_string())),
                opt_param("category", None),
            ]),
        );
        assert_eq!(url, "https://example.test/search?q=a%26b%20c");
    }

    #[test]
    fn parse_rfc3339_rejects_garbage() {
        assert!(parse_rfc3339("2030-01-01T00:00:00Z").is_some());
        assert!(parse_rfc3339("tomorrow").is_none());
    }
}
