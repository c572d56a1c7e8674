use crate::domain::constants::ESTIMATE_ACCESS_PATH;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com/beta";

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("{} not found.", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a valid token file: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("accessToken missing.")]
    MissingToken,
}

/// Supplies the bearer token attached to every directory request.
pub trait CredentialProvider {
    fn access_token(&self) -> &str;
}

/// Token read from a roadtools-style auth file (`{"accessToken": "..."}`).
#[derive(Debug, Clone)]
pub struct TokenFile {
    token: String,
}

#[derive(Deserialize)]
struct TokenFileBody {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

impl TokenFile {
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        if !path.exists() {
            return Err(AuthError::MissingFile(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| AuthError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let body: TokenFileBody =
            serde_json::from_str(&raw).map_err(|source| AuthError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        match body.access_token {
            Some(token) if !token.is_empty() => Ok(Self { token }),
            _ => Err(AuthError::MissingToken),
        }
    }
}

impl CredentialProvider for TokenFile {
    fn access_token(&self) -> &str {
        &self.token
    }
}

/// Fixed token for tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[cfg(test)]
impl CredentialProvider for StaticToken {
    fn access_token(&self) -> &str {
        &self.0
    }
}

/// Continuation cursor pointing at the next page of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    pub fn next_cursor(&self) -> Option<PageCursor> {
        self.next_link.as_deref().map(PageCursor::new)
    }
}

/// Entry carrying only a `name`, as returned by the namespace and action listings.
#[derive(Debug, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

/// Entry carrying only an `id`, as returned by `$select=id` object listings.
#[derive(Debug, Deserialize)]
pub struct ObjectEntry {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(rename = "resourceAction")]
    pub resource_action: String,
    #[serde(rename = "directoryScopeId")]
    pub directory_scope_id: String,
}

#[derive(Debug, Serialize)]
pub struct EstimateAccessRequest<'a> {
    #[serde(rename = "resourceActionAuthorizationChecks")]
    pub checks: &'a [CheckRequest],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckResult {
    #[serde(rename = "resourceAction")]
    pub resource_action: String,
    #[serde(rename = "directoryScopeId")]
    pub directory_scope_id: String,
    #[serde(rename = "accessDecision")]
    pub access_decision: String,
}

#[derive(Debug, Deserialize)]
pub struct EstimateAccessResponse {
    #[serde(default)]
    pub value: Vec<CheckResult>,
}

/// Submits one batch of authorization checks and returns the evaluated items.
pub trait AccessEstimator {
    fn estimate_access(&self, checks: &[CheckRequest]) -> Result<Vec<CheckResult>, GraphError>;
}

pub struct GraphClient {
    http: reqwest::blocking::Client,
    base: String,
    credentials: Box<dyn CredentialProvider>,
}

impl GraphClient {
    pub fn new(
        base: impl Into<String>,
        credentials: Box<dyn CredentialProvider>,
    ) -> Result<Self, GraphError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("entraperm/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base: base.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub fn fetch_page<T: DeserializeOwned>(
        &self,
        cursor: &PageCursor,
    ) -> Result<Page<T>, GraphError> {
        let url = cursor.url();
        tracing::debug!(url, "GET");
        self.http
            .get(url)
            .bearer_auth(self.credentials.access_token())
            .header("ConsistencyLevel", "eventual")
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|source| GraphError::Request {
                url: url.to_string(),
                source,
            })
    }

    pub fn post_batch<B: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<serde_json::Value, GraphError> {
        tracing::debug!(url, "POST");
        self.http
            .post(url)
            .bearer_auth(self.credentials.access_token())
            .json(payload)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|source| GraphError::Request {
                url: url.to_string(),
                source,
            })
    }

    /// Lazily walks a paged collection starting at `path`.
    pub fn pages<T: DeserializeOwned>(&self, path: &str) -> Pages<'_, T> {
        Pages {
            client: self,
            cursor: Some(PageCursor::new(self.url(path))),
            _item: PhantomData,
        }
    }

    /// Collects every item of a paged collection in request order.
    pub fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, GraphError> {
        let mut out = Vec::new();
        for page in self.pages(path) {
            out.extend(page?);
        }
        Ok(out)
    }
}

impl AccessEstimator for GraphClient {
    fn estimate_access(&self, checks: &[CheckRequest]) -> Result<Vec<CheckResult>, GraphError> {
        let url = self.url(ESTIMATE_ACCESS_PATH);
        let body = self.post_batch(&url, &EstimateAccessRequest { checks })?;
        let resp: EstimateAccessResponse = serde_json::from_value(body)
            .map_err(|source| GraphError::Decode { url, source })?;
        Ok(resp.value)
    }
}

/// Finite, non-restartable sequence of pages. Ends after the last page or the
/// first failed request.
pub struct Pages<'a, T> {
    client: &'a GraphClient,
    cursor: Option<PageCursor>,
    _item: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for Pages<'_, T> {
    type Item = Result<Vec<T>, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        match self.client.fetch_page::<T>(&cursor) {
            Ok(page) => {
                self.cursor = page.next_cursor();
                Some(Ok(page.value))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
