use log::{debug, trace};
use serde::Deserialize;

use crate::{
    constants::{GITHUB_API_URL, USER_AGENT},
    error::{LookupError, MalformedPathError},
};

/// Owner and repository named by a GitHub import path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoCoordinates<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
}

impl<'a> RepoCoordinates<'a> {
    /// Splits `host/owner/repo[/subpath...]`. Anything shorter is malformed.
    pub fn parse(path: &'a str) -> Result<Self, MalformedPathError> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < 3 {
            return Err(MalformedPathError { path: path.to_string(), segments: segments.len() });
        }
        Ok(Self { owner: segments[1], repo: segments[2] })
    }
}

/// Looks up the star count of a repository.
pub trait StarSource {
    fn stars(&self, owner: &str, repo: &str) -> Result<u64, LookupError>;
}

impl<F> StarSource for F
where
    F: Fn(&str, &str) -> Result<u64, LookupError>,
{
    fn stars(&self, owner: &str, repo: &str) -> Result<u64, LookupError> {
        self(owner, repo)
    }
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
}

/// Synchronous client for the GitHub REST repository endpoint.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        // Status codes are classified by hand, 404 in particular.
        let agent = ureq::config::Config::builder().http_status_as_error(false).build().new_agent();
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { agent, api_url, token }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(GITHUB_API_URL, None)
    }
}

impl StarSource for GitHubClient {
    fn stars(&self, owner: &str, repo: &str) -> Result<u64, LookupError> {
        let url = format!("{}/repos/{}/{}", self.api_url, owner, repo);
        trace!("GET {}", url);

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.call()?;
        let status = response.status().as_u16();
        debug!("GitHub responded {} for {}/{}", status, owner, repo);

        if status == 404 {
            return Err(LookupError::NotFound);
        }
        if !(200..300).contains(&status) {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(LookupError::Status { status, body });
        }

        let text = response.into_body().read_to_string()?;
        let body: RepoResponse = serde_json::from_str(&text)?;
        Ok(body.stargazers_count)
    }
}
