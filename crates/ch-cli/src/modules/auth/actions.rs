use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::cli_args::*;
use crate::modules::auth::{apply_token, login, LoginOptions, SystemBrowser};
use crate::modules::system::{api_key, mask_secret, parse_rfc3339, print_json, CommandContext};
use crate::LOGIN_TIMEOUT;

pub(crate) async fn handle_auth(args: AuthArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        AuthCommand::SetKey(args) => {
            let key = args.key.trim().to_string();
            if key.is_empty() {
                anyhow::bail!("API key is required");
            }
            let mut config = ctx.store.read_config()?;
            config.api_key = key;
            ctx.store.write_config(&config)?;
            ctx.reporter.success("API key saved.");
        }
        AuthCommand::Status => handle_status(ctx)?,
        AuthCommand::Login(args) => handle_login(args, ctx).await?,
        AuthCommand::Logout => {
            let mut config = ctx.store.read_config()?;
            config.oauth_access_token.clear();
            config.oauth_refresh_token.clear();
            config.oauth_token_expiry.clear();
            ctx.store.write_config(&config)?;
            ctx.reporter.success("Logged out of filing.");
        }
    }
    Ok(())
}

fn handle_status(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let key = api_key(ctx.store).ok();
    let config = ctx.store.read_config()?;
    let logged_in = !config.oauth_access_token.is_empty();
    let expired = parse_rfc3339(&config.oauth_token_expiry)
        .map(|expires_at| Utc::now() >= expires_at)
        .unwrap_or(false);

    if ctx.output.json {
        return print_json(&json!({
            "authenticated": key.is_some(),
            "oauth_logged_in": logged_in,
            "oauth_token_expiry": config.oauth_token_expiry,
        }));
    }

    match key {
        Some(key) => ctx
            .reporter
            .success(&format!("Authenticated (key: {})", mask_secret(&key))),
        None => ctx
            .reporter
            .warn("Not authenticated. Run: ch auth set-key <YOUR_KEY>"),
    }
    if !logged_in {
        ctx.reporter.info("Not logged in for filing. Run: ch auth login");
    } else if expired {
        ctx.reporter.warn(&format!(
            "Filing token expired at {} (refreshed on next filing)",
            config.oauth_token_expiry
        ));
    } else if config.oauth_token_expiry.is_empty() {
        ctx.reporter.success("Logged in for filing");
    } else {
        ctx.reporter.success(&format!(
            "Logged in for filing (token expires {})",
            config.oauth_token_expiry
        ));
    }
    Ok(())
}

async fn handle_login(args: LoginArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let mut config = ctx.store.read_config()?;
    let client_id = pick_credential(args.client_id, &config.oauth_client_id).ok_or_else(|| {
        anyhow::anyhow!(
            "OAuth client id missing (pass --client-id or set CH_OAUTH_CLIENT_ID; \
             register an application at https://developer.company-information.service.gov.uk/)"
        )
    })?;
    let client_secret = pick_credential(args.client_secret, &config.oauth_client_secret)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "OAuth client secret missing (pass --client-secret or set CH_OAUTH_CLIENT_SECRET)"
            )
        })?;

    ctx.reporter.info("Opening your browser to authorize filing access...");
    let now = Utc::now();
    let token = login(
        ctx.client,
        ctx.endpoints,
        &client_id,
        &client_secret,
        LoginOptions {
            timeout: LOGIN_TIMEOUT,
            cancel: ctx.cancel.clone(),
            browser: Arc::new(SystemBrowser),
            reporter: ctx.reporter,
        },
    )
    .await
    .map_err(|err| err.context("login"))?;

    config.oauth_client_id = client_id;
    config.oauth_client_secret = client_secret;
    apply_token(&mut config, &token, now)?;
    ctx.store
        .write_config(&config)
        .map_err(|err| err.context("save token"))?;

    if ctx.output.json {
        return print_json(&json!({
            "logged_in": true,
            "oauth_token_expiry": config.oauth_token_expiry,
        }));
    }
    ctx.reporter.success(&format!(
        "Logged in for filing (expires in {}s)",
        token.expires_in
    ));
    Ok(())
}

fn pick_credential(arg: Option<String>, stored: &str) -> Option<String> {
    arg.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| (!stored.is_empty()).then(|| stored.to_string()))
}
