use anyhow::Context;
use chrono::{DateTime, Duration as ChronoDuration, SecondsFormat, Utc};
use ch_core::{TokenErrorResponse, TokenResponse};
use tracing::{debug, info, warn};

use crate::modules::auth::OAuthError;
use crate::modules::system::{parse_rfc3339, CliConfig, ConfigStore};

pub(crate) async fn exchange_code(
    client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    code: &str,
    redirect_uri: &str,
) -> anyhow::Result<TokenResponse> {
    let params = [
        ("grant_type", "authorization_code"),
        ("code", code),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("redirect_uri", redirect_uri),
    ];
    request_token(client, token_url, &params).await
}

/// Single refresh-token grant. Never retried: a failure here means the user
/// has to log in again.
pub(crate) async fn refresh_access_token(
    client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> anyhow::Result<TokenResponse> {
    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", client_id),
        ("client_secret", client_secret),
    ];
    request_token(client, token_url, &params).await
}

async fn request_token(
    client: &reqwest::Client,
    token_url: &str,
    params: &[(&str, &str)],
) -> anyhow::Result<TokenResponse> {
    debug!(url = %token_url, "token request");
    let response = client
        .post(token_url)
        .form(params)
        .send()
        .await
        .context("token request")?;
    let status = response.status();
    if !status.is_success() {
        let body = response
            .json::<TokenErrorResponse>()
            .await
            .unwrap_or_default();
        return Err(OAuthError::TokenEndpoint {
            status: status.as_u16(),
            error: body.error,
            description: body.error_description,
        }
        .into());
    }
    response
        .json::<TokenResponse>()
        .await
        .context("decode token response")
}

/// Overwrites all three token fields together from one token response.
pub(crate) fn apply_token(
    config: &mut CliConfig,
    token: &TokenResponse,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let expires_at = ChronoDuration::try_seconds(token.expires_in)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .ok_or_else(|| {
            anyhow::anyhow!("invalid expires_in in token response: {}", token.expires_in)
        })?;
    config.oauth_access_token = token.access_token.clone();
    config.oauth_refresh_token = token.refresh_token.clone();
    config.oauth_token_expiry = expires_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    Ok(())
}

/// Returns a usable access token, refreshing and persisting a new pair when
/// the stored one has expired.
pub(crate) async fn ensure_access_token(
    client: &reqwest::Client,
    token_url: &str,
    store: &dyn ConfigStore,
) -> anyhow::Result<String> {
    let mut config = store.read_config()?;
    if config.oauth_access_token.is_empty() {
        anyhow::bail!("not logged in for filing (run: ch auth login)");
    }

    // An unparsable expiry is treated as still valid.
    let expired = match config.oauth_token_expiry.as_str() {
        "" => false,
        raw => match parse_rfc3339(raw) {
            Some(expires_at) => Utc::now() >= expires_at,
            None => {
                warn!(expiry = %raw, "ignoring unparsable token expiry");
                false
            }
        },
    };
    if !expired {
        return Ok(config.oauth_access_token);
    }

    if config.oauth_refresh_token.is_empty()
        || config.oauth_client_id.is_empty()
        || config.oauth_client_secret.is_empty()
    {
        anyhow::bail!("access token expired, please re-login: ch auth login");
    }

    info!("access token expired; refreshing");
    let now = Utc::now();
    let token = refresh_access_token(
        client,
        token_url,
        &config.oauth_client_id,
        &config.oauth_client_secret,
        &config.oauth_refresh_token,
    )
    .await
    .context("refresh token (try: ch auth login)")?;

    apply_token(&mut config, &token, now)?;
    store
        .write_config(&config)
        .context("save refreshed token")?;
    debug!(expiry = %config.oauth_token_expiry, "stored refreshed token");
    Ok(config.oauth_access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::system::MemoryConfigStore;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn apply_token_sets_expiry_from_now() -> anyhow::Result<()> {
        let now = parse_rfc3339("2026-10-15T12:00:00Z").expect("now");
        let mut config = CliConfig {
            oauth_access_token: "old".to_string(),
            oauth_refresh_token: "old-refresh".to_string(),
            ..Default::default()
        };
        apply_token(
            &mut config,
            &TokenResponse {
                access_token: "new".to_string(),
                refresh_token: "new-refresh".to_string(),
                expires_in: 3600,
                token_type: "Bearer".to_string(),
            },
            now,
        )?;
        assert_eq!(config.oauth_access_token, "new");
        assert_eq!(config.oauth_refresh_token, "new-refresh");
        assert_eq!(config.oauth_token_expiry, "2026-10-15T13:00:00Z");
        Ok(())
    }

    #[test]
    fn out_of_range_lifetime_is_rejected_without_touching_record() {
        let now = parse_rfc3339("2026-10-15T12:00:00Z").expect("now");
        let original = CliConfig {
            oauth_access_token: "old".to_string(),
            oauth_refresh_token: "old-refresh".to_string(),
            oauth_token_expiry: "2026-10-15T11:00:00Z".to_string(),
            ..Default::default()
        };
        let mut config = original.clone();
        let err = apply_token(
            &mut config,
            &TokenResponse {
                access_token: "new".to_string(),
                refresh_token: "new-refresh".to_string(),
                expires_in: 10_000_000_000_000,
                token_type: "Bearer".to_string(),
            },
            now,
        )
        .expect_err("overflow");
        assert!(err.to_string().contains("invalid expires_in"));
        assert_eq!(config, original);
    }

    #[tokio::test]
    async fn refresh_posts_form_fields() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth2/token")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
                Matcher::UrlEncoded("refresh_token".into(), "r-1".into()),
                Matcher::UrlEncoded("client_id".into(), "cid".into()),
                Matcher::UrlEncoded("client_secret".into(), "secret".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "access_token": "a-2",
                    "refresh_token": "r-2",
                    "expires_in": 3600,
                    "token_type": "Bearer"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let token = refresh_access_token(
            &reqwest::Client::new(),
            &format!("{}/oauth2/token", server.url()),
            "cid",
            "secret",
            "r-1",
        )
        .await?;
        assert_eq!(token.access_token, "a-2");
        assert_eq!(token.refresh_token, "r-2");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn token_endpoint_error_carries_provider_fields() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/oauth2/token")
            .with_status(400)
            .with_body(
                json!({"error": "invalid_grant", "error_description": "refresh token revoked"})
                    .to_string(),
            )
            .create_async()
            .await;

        let err = refresh_access_token(
            &reqwest::Client::new(),
            &format!("{}/oauth2/token", server.url()),
            "cid",
            "secret",
            "r-1",
        )
        .await
        .expect_err("rejected");
        match err.downcast_ref::<OAuthError>() {
            Some(OAuthError::TokenEndpoint {
                status,
                error,
                description,
            }) => {
                assert_eq!(*status, 400);
                assert_eq!(error, "invalid_grant");
                assert_eq!(description, "refresh token revoked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparsable_expiry_is_treated_as_valid() -> anyhow::Result<()> {
        let store = MemoryConfigStore::with_config(CliConfig {
            oauth_access_token: "access".to_string(),
            oauth_token_expiry: "not-a-date".to_string(),
            ..Default::default()
        });
        let token =
            ensure_access_token(&reqwest::Client::new(), "http://127.0.0.1:9/token", &store)
                .await?;
        assert_eq!(token, "access");
        assert_eq!(store.write_count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_access_token_means_not_logged_in() {
        let store = MemoryConfigStore::default();
        let err = ensure_access_token(&reqwest::Client::new(), "http://127.0.0.1:9/token", &store)
            .await
            .expect_err("not logged in");
        assert!(err.to_string().contains("not logged in"));
    }
}
