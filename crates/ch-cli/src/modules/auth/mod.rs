mod actions;
pub(crate) mod args;
mod http;
mod oauth;
pub(crate) mod types;

pub(crate) use actions::handle_auth;
pub(crate) use http::{apply_token, ensure_access_token, exchange_code};
pub(crate) use oauth::login;
pub(crate) use types::{CallbackQuery, LoginOptions, OAuthEndpoints, OAuthError, SystemBrowser};
