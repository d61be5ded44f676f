//! Blocking GitHub REST implementation of the [`OrgDirectory`] capability.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::directory::{OrgDirectory, PAGE_SIZE, Page};
use crate::error::{AuditError, Result};
use crate::model::{MemberSummary, TeamSummary, UserProfile};

const API_ROOT: &str = "https://api.github.com";
const ACCEPT_JSON: &str = "application/vnd.github+json";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("gh-org-audit/", env!("CARGO_PKG_VERSION"));

/// Directory client backed by the GitHub REST API.
pub struct GithubDirectory {
    client: Client,
    token: String,
    base_url: String,
}

impl GithubDirectory {
    /// Builds a client authenticating with the configured bearer token.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            token: config.token.clone(),
            base_url: API_ROOT.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_JSON)
            .query(query)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Api { status, url });
        }
        let body = response.text()?;
        serde_json::from_str(&body).map_err(|source| AuditError::Decode { url, source })
    }

    fn get_page<T: DeserializeOwned>(&self, path: &str, page: u32) -> Result<Page<T>> {
        debug!(path, page, "fetching listing page");
        let query = [
            ("per_page", PAGE_SIZE.to_string()),
            ("page", page.to_string()),
        ];
        let items: Vec<T> = self.get_json(path, &query)?;
        // The listing endpoints carry no next-page field in the body; a page
        // shorter than the requested size means the listing is exhausted.
        let next = if (items.len() as u32) < PAGE_SIZE {
            None
        } else {
            Some(page + 1)
        };
        Ok(Page { items, next })
    }
}

impl OrgDirectory for GithubDirectory {
    fn list_members(&self, org: &str, page: u32) -> Result<Page<MemberSummary>> {
        self.get_page(&format!("/orgs/{org}/members"), page)
    }

    fn list_teams(&self, org: &str, page: u32) -> Result<Page<TeamSummary>> {
        self.get_page(&format!("/orgs/{org}/teams"), page)
    }

    fn list_team_members(&self, team_id: u64, page: u32) -> Result<Page<MemberSummary>> {
        self.get_page(&format!("/teams/{team_id}/members"), page)
    }

    fn get_user(&self, id: u64) -> Result<UserProfile> {
        self.get_json(&format!("/user/{id}"), &[])
    }
}
