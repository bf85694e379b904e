use anyhow::Context;
use ch_core::{CompanySearchResult, OfficerSearchResult};

use crate::modules::system::{build_params, page_param, ApiClient};

fn query_params(query: &str, items_per_page: i64, start_index: i64) -> Vec<(String, String)> {
    build_params([
        Some(("q".to_string(), query.to_string())),
        page_param("items_per_page", items_per_page),
        page_param("start_index", start_index),
    ])
}

pub(crate) async fn search_companies(
    api: &ApiClient<'_>,
    query: &str,
    items_per_page: i64,
    start_index: i64,
) -> anyhow::Result<CompanySearchResult> {
    api.get_json(
        "/search/companies",
        query_params(query, items_per_page, start_index),
    )
    .await
    .context("search companies")
}

pub(crate) async fn search_officers(
    api: &ApiClient<'_>,
    query: &str,
    items_per_page: i64,
    start_index: i64,
) -> anyhow::Result<OfficerSearchResult> {
    api.get_json(
        "/search/officers",
        query_params(query, items_per_page, start_index),
    )
    .await
    .context("search officers")
}
