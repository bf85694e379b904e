use std::sync::Arc;
use std::time::Duration;

use ch_core::{AUTHORIZE_PATH, TOKEN_PATH};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::modules::system::Reporter;

#[derive(Debug, Clone)]
pub struct OAuthEndpoints {
    pub authorize_url: String,
    pub token_url: String,
}

impl OAuthEndpoints {
    pub(crate) fn from_identity_url(identity_url: &str) -> Self {
        let base = identity_url.trim_end_matches('/');
        Self {
            authorize_url: format!("{base}{AUTHORIZE_PATH}"),
            token_url: format!("{base}{TOKEN_PATH}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum OAuthError {
    #[error("state mismatch")]
    StateMismatch,
    #[error("authorization error: {error} - {description}")]
    Authorization { error: String, description: String },
    #[error("no authorization code received")]
    NoCode,
    #[error("timed out waiting for authorization ({} seconds)", .0.as_secs())]
    Timeout(Duration),
    #[error("login cancelled")]
    Cancelled,
    #[error("callback server: {0}")]
    Server(String),
    #[error("token exchange failed (HTTP {status}): {error} - {description}")]
    TokenEndpoint {
        status: u16,
        error: String,
        description: String,
    },
}

/// Query string the identity provider appends to the redirect.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CallbackQuery {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

pub(crate) trait BrowserLauncher: Send + Sync {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

impl<F> BrowserLauncher for F
where
    F: Fn(&str) -> anyhow::Result<()> + Send + Sync,
{
    fn open(&self, url: &str) -> anyhow::Result<()> {
        self(url)
    }
}

pub(crate) struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        open::that_detached(url).map_err(|err| anyhow::anyhow!("open browser: {err}"))
    }
}

pub(crate) struct LoginOptions<'a> {
    pub timeout: Duration,
    pub cancel: CancellationToken,
    pub browser: Arc<dyn BrowserLauncher>,
    pub reporter: &'a dyn Reporter,
}
