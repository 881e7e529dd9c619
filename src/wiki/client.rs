use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use super::outline::build_outline;
use super::{Page, PageLookup};
use crate::error::{Result, ScrapeError};
use crate::settings::Settings;

#[derive(Deserialize)]
struct ApiResponse {
    query: Option<ApiQuery>,
}

#[derive(Deserialize)]
struct ApiQuery {
    #[serde(default)]
    pages: HashMap<String, ApiPage>,
}

#[derive(Deserialize)]
struct ApiPage {
    pageid: Option<i64>,
    title: String,
    missing: Option<serde_json::Value>,
    invalid: Option<serde_json::Value>,
    #[serde(default)]
    extract: String,
}

/// Blocking client for the MediaWiki `prop=extracts` API.
pub struct WikiClient {
    http: Client,
    api_url: String,
}

impl WikiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(WikiClient {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    fn fetch_extract(&self, title: &str) -> Result<ApiResponse> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("exsectionformat", "wiki"),
            ("redirects", "1"),
            ("titles", title),
        ];
        debug!("GET {} titles={}", self.api_url, title);
        let body = self
            .http
            .get(&self.api_url)
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;
        serde_json::from_str(&body).map_err(|e| ScrapeError::MalformedResponse(e.to_string()))
    }
}

impl PageLookup for WikiClient {
    fn page(&self, title: &str) -> Result<Page> {
        let response = self.fetch_extract(title)?;
        let pages = response
            .query
            .ok_or_else(|| ScrapeError::MalformedResponse("missing `query` object".into()))?
            .pages;

        // A single title was requested, so at most one page comes back.
        let Some(api_page) = pages.into_values().next() else {
            return Ok(Page::missing(title));
        };

        let exists =
            api_page.pageid.is_some() && api_page.missing.is_none() && api_page.invalid.is_none();
        if !exists {
            return Ok(Page::missing(api_page.title));
        }

        let outline = build_outline(&api_page.extract);
        Ok(Page {
            title: api_page.title,
            exists,
            summary: outline.summary,
            sections: outline.sections,
        })
    }
}

// ── Tests ──
