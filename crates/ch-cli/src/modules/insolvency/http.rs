use anyhow::Context;
use ch_core::InsolvencyResponse;

use crate::modules::system::ApiClient;

pub(crate) async fn get_insolvency(
    api: &ApiClient<'_>,
    company_number: &str,
) -> anyhow::Result<InsolvencyResponse> {
    let path = format!("/company/{}/insolvency", urlencoding::encode(company_number));
    api.get_json(&path, Vec::new())
        .await
        .context("get insolvency")
}
