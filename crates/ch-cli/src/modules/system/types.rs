use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::config::{api_key, ConfigStore};
use super::http::ApiClient;
use super::output::{OutputMode, Reporter};
use crate::modules::auth::OAuthEndpoints;

/// Persisted credential record. Empty strings mean "not set"; every field is
/// optional on disk so partial files load cleanly.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oauth_client_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oauth_client_secret: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oauth_access_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oauth_refresh_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oauth_token_expiry: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_company: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company_name: String,
}

pub(crate) struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub api_url: &'a str,
    pub endpoints: &'a OAuthEndpoints,
    pub store: &'a dyn ConfigStore,
    pub output: OutputMode,
    pub reporter: &'a dyn Reporter,
    pub cancel: CancellationToken,
}

impl<'a> CommandContext<'a> {
    /// Read client authenticated with the configured API key.
    pub(crate) fn api(&self) -> anyhow::Result<ApiClient<'a>> {
        let key = api_key(self.store)?;
        Ok(ApiClient::new(self.client, self.api_url, key))
    }
}
