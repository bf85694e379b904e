use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use ch_core::{TokenResponse, CALLBACK_PATH, PROFILE_READ_SCOPE};
use rand::RngCore;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::modules::auth::{exchange_code, CallbackQuery, LoginOptions, OAuthEndpoints, OAuthError};
use crate::CALLBACK_SHUTDOWN_GRACE;

const SUCCESS_PAGE: &str = "<!DOCTYPE html><html><body><h2>Authenticated!</h2>\
<p>You can close this tab and return to the terminal.</p></body></html>";

type CallbackOutcome = Result<String, OAuthError>;

/// Single-slot, at-most-once handoff from the callback handler to the waiter.
#[derive(Clone)]
struct CallbackState {
    expected_state: Arc<str>,
    delivery: Arc<Mutex<Option<oneshot::Sender<CallbackOutcome>>>>,
}

impl CallbackState {
    fn deliver(&self, outcome: CallbackOutcome) {
        let Ok(mut slot) = self.delivery.lock() else {
            return;
        };
        match slot.take() {
            Some(sender) => {
                let _ = sender.send(outcome);
            }
            None => debug!("ignoring callback after the first one"),
        }
    }
}

/// Runs the authorization-code flow end to end: loopback listener, browser,
/// wait for the redirect, then exchange the code at the token endpoint.
pub(crate) async fn login(
    client: &reqwest::Client,
    endpoints: &OAuthEndpoints,
    client_id: &str,
    client_secret: &str,
    options: LoginOptions<'_>,
) -> anyhow::Result<TokenResponse> {
    let listener = TcpListener::bind(("127.0.0.1", 0))
        .await
        .context("listen")?;
    let port = listener.local_addr().context("listen")?.port();
    let redirect_uri = format!("http://127.0.0.1:{port}{CALLBACK_PATH}");
    let state = random_state();
    let authorize_url = authorization_url(endpoints, client_id, &redirect_uri, &state)?;

    let (sender, receiver) = oneshot::channel();
    let callback_state = CallbackState {
        expected_state: Arc::from(state.as_str()),
        delivery: Arc::new(Mutex::new(Some(sender))),
    };
    let router = Router::new()
        .route(CALLBACK_PATH, get(handle_callback))
        .with_state(callback_state);

    let shutdown = CancellationToken::new();
    let server_shutdown = shutdown.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
            .await
    });
    debug!(redirect_uri = %redirect_uri, "callback listener started");

    let browser = Arc::clone(&options.browser);
    let mut launch = tokio::task::spawn_blocking(move || browser.open(&authorize_url));
    let mut launched = false;
    let deadline = tokio::time::sleep(options.timeout);
    tokio::pin!(deadline);
    let mut receiver = receiver;

    // The launcher may block; it never holds up the timeout or cancellation.
    let outcome = loop {
        tokio::select! {
            result = &mut launch, if !launched => {
                launched = true;
                let failure = match result {
                    Ok(Ok(())) => None,
                    Ok(Err(err)) => Some(format!("{err:#}")),
                    Err(err) => Some(err.to_string()),
                };
                if let Some(failure) = failure {
                    warn!("failed to open browser: {failure}");
                    options
                        .reporter
                        .warn("Could not open a browser; open the authorization URL manually.");
                }
            }
            delivered = &mut receiver => break delivered
                .unwrap_or_else(|_| Err(OAuthError::Server("callback server stopped".to_string()))),
            _ = &mut deadline => break Err(OAuthError::Timeout(options.timeout)),
            _ = options.cancel.cancelled() => break Err(OAuthError::Cancelled),
        }
    };
    if !launched {
        debug!("browser launcher still running; leaving it detached");
    }

    shutdown.cancel();
    match tokio::time::timeout(CALLBACK_SHUTDOWN_GRACE, &mut server).await {
        Ok(Ok(Ok(()))) => debug!("callback listener stopped"),
        Ok(Ok(Err(err))) => warn!("callback listener failed: {err}"),
        Ok(Err(err)) => warn!("callback listener task failed: {err}"),
        Err(_) => {
            warn!("callback listener did not stop in time; aborting");
            server.abort();
            let _ = server.await;
        }
    }

    let code = outcome?;
    exchange_code(
        client,
        &endpoints.token_url,
        client_id,
        client_secret,
        &code,
        &redirect_uri,
    )
    .await
}

async fn handle_callback(
    State(state): State<CallbackState>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    let (outcome, response) = evaluate_callback(&state.expected_state, query);
    state.deliver(outcome);
    response
}

/// Decides what one callback request means. State is checked before anything
/// else so a forged request never reaches the code path.
pub(crate) fn evaluate_callback(
    expected_state: &str,
    query: CallbackQuery,
) -> (Result<String, OAuthError>, Response) {
    if query.state.as_deref() != Some(expected_state) {
        return (
            Err(OAuthError::StateMismatch),
            (StatusCode::BAD_REQUEST, "invalid state").into_response(),
        );
    }
    if let Some(error) = query.error.filter(|value| !value.is_empty()) {
        let description = query.error_description.unwrap_or_default();
        let page = format!("Authorization failed: {description}");
        return (
            Err(OAuthError::Authorization { error, description }),
            (StatusCode::BAD_REQUEST, page).into_response(),
        );
    }
    match query.code.filter(|value| !value.is_empty()) {
        Some(code) => (Ok(code), Html(SUCCESS_PAGE).into_response()),
        None => (
            Err(OAuthError::NoCode),
            (StatusCode::BAD_REQUEST, "no code received").into_response(),
        ),
    }
}

pub(crate) fn authorization_url(
    endpoints: &OAuthEndpoints,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> anyhow::Result<String> {
    let mut url =
        reqwest::Url::parse(&endpoints.authorize_url).context("parse authorization endpoint")?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", PROFILE_READ_SCOPE)
        .append_pair("state", state);
    Ok(url.to_string())
}

/// 128 random bits, hex-encoded.
pub(crate) fn random_state() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
