use crate::config::ServerConfig;
use crate::core::RecordStore;
use crate::utils::error::{CommuteError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

pub const NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CREATED_TIME_PROPERTY: &str = "Created time";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    sorts: Vec<Sort<'a>>,
}

#[derive(Debug, Serialize)]
struct Sort<'a> {
    property: &'a str,
    direction: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<PageSummary>,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default, deserialize_with = "blank_as_none")]
    created_time: Option<DateTime<Utc>>,
}

/// `null` and `""` both mean the page carries no timestamp.
fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Serialize)]
struct CreatePageRequest<'a> {
    parent: Parent<'a>,
    properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Properties<'a> {
    name: TitleProperty<'a>,
}

#[derive(Debug, Serialize)]
struct TitleProperty<'a> {
    title: Vec<RichText<'a>>,
}

#[derive(Debug, Serialize)]
struct RichText<'a> {
    text: TextContent<'a>,
}

#[derive(Debug, Serialize)]
struct TextContent<'a> {
    content: &'a str,
}

/// Created page; only the id is kept for logging.
#[derive(Debug, Deserialize)]
struct CreatedPage {
    #[serde(default)]
    id: Option<String>,
}

/// Thin client for the Notion REST API, scoped to one database.
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: Client,
    base_url: String,
    api_key: String,
    database_id: String,
    timeout: Duration,
}

impl NotionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            database_id: database_id.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Upper bound on each Notion call, connect through body.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.notion_base_url.clone(),
            config.notion_api_key.clone(),
            config.database_id.clone(),
        )
        .with_timeout(Duration::from_secs(config.notion_timeout_secs))
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Making {} request to: {}", method, url);

        let response = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("Notion-Version", NOTION_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(body)?)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CommuteError::UpstreamStatus { status, body });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| CommuteError::MalformedResponse {
            message: format!("{} (from {})", e, path),
        })
    }
}

#[async_trait]
impl RecordStore for NotionClient {
    async fn latest_created_time(&self) -> Result<Option<DateTime<Utc>>> {
        let body = QueryRequest {
            sorts: vec![Sort {
                property: CREATED_TIME_PROPERTY,
                direction: "descending",
            }],
        };

        let response: QueryResponse = self
            .request(
                Method::POST,
                &format!("databases/{}/query", self.database_id),
                &body,
            )
            .await?;

        tracing::debug!("Query returned {} records", response.results.len());
        Ok(response.results.first().and_then(|page| page.created_time))
    }

    async fn create_record(&self, title: &str) -> Result<()> {
        let body = CreatePageRequest {
            parent: Parent {
                database_id: &self.database_id,
            },
            properties: Properties {
                name: TitleProperty {
                    title: vec![RichText {
                        text: TextContent { content: title },
                    }],
                },
            },
        };

        let page: CreatedPage = self.request(Method::POST, "pages", &body).await?;
        tracing::debug!("Created page {}", page.id.as_deref().unwrap_or("<unknown>"));
        Ok(())
    }
}
