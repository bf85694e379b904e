use anyhow::Context;
use ch_core::OfficerList;

use crate::modules::system::{build_params, page_param, ApiClient};

pub(crate) async fn list_officers(
    api: &ApiClient<'_>,
    company_number: &str,
    items_per_page: i64,
    start_index: i64,
) -> anyhow::Result<OfficerList> {
    let path = format!("/company/{}/officers", urlencoding::encode(company_number));
    let params = build_params([
        page_param("items_per_page", items_per_page),
        page_param("start_index", start_index),
    ]);
    api.get_json(&path, params).await.context("list officers")
}
