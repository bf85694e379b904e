use anyhow::Context;
use ch_core::{FilingHistoryItem, FilingHistoryList};

use crate::modules::system::{build_params, opt_param, page_param, ApiClient};

pub(crate) async fn list_filing_history(
    api: &ApiClient<'_>,
    company_number: &str,
    category: Option<String>,
    items_per_page: i64,
    start_index: i64,
) -> anyhow::Result<FilingHistoryList> {
    let path = format!(
        "/company/{}/filing-history",
        urlencoding::encode(company_number)
    );
    let params = build_params([
        opt_param("category", category.filter(|value| !value.is_empty())),
        page_param("items_per_page", items_per_page),
        page_param("start_index", start_index),
    ]);
    api.get_json(&path, params).await.context("list filings")
}

pub(crate) async fn get_filing_history_item(
    api: &ApiClient<'_>,
    company_number: &str,
    transaction_id: &str,
) -> anyhow::Result<FilingHistoryItem> {
    let path = format!(
        "/company/{}/filing-history/{}",
        urlencoding::encode(company_number),
        urlencoding::encode(transaction_id)
    );
    api.get_json(&path, Vec::new()).await.context("get filing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn category_filter_is_forwarded() -> anyhow::Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/company/00445790/filing-history")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("category".into(), "accounts".into()),
                Matcher::UrlEncoded("items_per_page".into(), "25".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "total_count": 1,
                    "items": [{
                        "transaction_id": "MzA1",
                        "category": "accounts",
                        "type": "AA",
                        "description": "accounts-with-accounts-type-group",
                        "date": "2024-06-01"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let api = ApiClient::new(&client, &server.url(), "k".to_string());
        let list =
            list_filing_history(&api, "00445790", Some("accounts".to_string()), 25, 0).await?;
        assert_eq!(list.total_count, 1);
        assert_eq!(list.items[0].filing_type, "AA");
        mock.assert_async().await;
        Ok(())
    }
}
