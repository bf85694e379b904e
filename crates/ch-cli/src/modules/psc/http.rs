use anyhow::Context;
use ch_core::PscList;

use crate::modules::system::{build_params, page_param, ApiClient};

pub(crate) async fn list_pscs(
    api: &ApiClient<'_>,
    company_number: &str,
    items_per_page: i64,
    start_index: i64,
) -> anyhow::Result<PscList> {
    let path = format!(
        "/company/{}/persons-with-significant-control",
        urlencoding::encode(company_number)
    );
    let params = build_params([
        page_param("items_per_page", items_per_page),
        page_param("start_index", start_index),
    ]);
    api.get_json(&path, params).await.context("list PSCs")
}
