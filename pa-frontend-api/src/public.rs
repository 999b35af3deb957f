use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use pa_boundary::{HealthResponse, SearchResponse, TagsResponse};

use crate::{into_json, Error, Result};

/// Public problem archive API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

/// Parameters of a single search request.
///
/// Empty or missing values are omitted from the query string so that
/// the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Comma-separated tag list, exactly as typed by the user.
    pub tags: Option<String>,
    /// Free-text query, e.g. a title fragment or a problem id.
    pub text: Option<String>,
    /// Tag match mode as understood by the server (`all` or `any`).
    pub mode: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u64>,
}

impl SearchQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let Self {
            tags,
            text,
            mode,
            limit,
        } = self;
        let mut params = vec![];

        if let Some(tags) = tags.as_deref().filter(|tags| !tags.is_empty()) {
            params.push(("tags", tags.to_string()));
        }
        if let Some(text) = text.as_deref().filter(|text| !text.is_empty()) {
            params.push(("q", text.to_string()));
        }
        if let Some(mode) = mode.as_deref().filter(|mode| !mode.is_empty()) {
            params.push(("mode", mode.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        // Results are always requested in stable id order.
        params.push(("sort", "id".to_string()));
        params
    }
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn tags(&self) -> Result<TagsResponse> {
        let url = format!("{}/tags", self.url);
        let response = Request::get(&url).send().await?;
        let payload: TagsResponse = into_json(response).await?;
        if payload.ok {
            Ok(payload)
        } else {
            Err(Error::Rejected("tags"))
        }
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let url = search_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        let payload: SearchResponse = into_json(response).await?;
        if payload.ok {
            Ok(payload)
        } else {
            Err(Error::Rejected("search"))
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.url);
        let response = Request::get(&url).send().await?;
        let payload: HealthResponse = into_json(response).await?;
        if payload.ok {
            Ok(payload)
        } else {
            Err(Error::Rejected("health"))
        }
    }
}

fn search_url(endpoint_url: &str, query: &SearchQuery) -> String {
    let params = query
        .to_query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(&value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{endpoint_url}/search?{params}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_omit_empty_parameters() {
        let query = SearchQuery {
            tags: Some("graphs, L2-dp".to_string()),
            text: Some(String::new()),
            mode: Some("any".to_string()),
            limit: Some(20),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("tags", "graphs, L2-dp".to_string()),
                ("mode", "any".to_string()),
                ("limit", "20".to_string()),
                ("sort", "id".to_string()),
            ]
        );
    }

    #[test]
    fn empty_query_still_requests_id_order() {
        assert_eq!(
            SearchQuery::default().to_query_pairs(),
            vec![("sort", "id".to_string())]
        );
    }

    #[test]
    fn search_url_is_percent_encoded() {
        let query = SearchQuery {
            tags: Some("graphs, L2-dp".to_string()),
            mode: Some("any".to_string()),
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(
            search_url("/api", &query),
            "/api/search?tags=graphs%2C%20L2%2Ddp&mode=any&limit=20&sort=id"
        );
    }

    #[test]
    fn free_text_is_sent_as_q() {
        let query = SearchQuery {
            text: Some("two sum".to_string()),
            ..Default::default()
        };
        assert_eq!(
            search_url("/api", &query),
            "/api/search?q=two%20sum&sort=id"
        );
    }
}
