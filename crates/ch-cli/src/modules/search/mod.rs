mod actions;
pub(crate) mod args;
mod http;

pub(crate) use actions::handle_search;
pub(crate) use http::search_companies;
