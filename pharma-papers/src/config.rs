//! Client configuration for the NCBI E-utilities

use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_TOOL: &str = "get-papers-list";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default number of identifiers requested from ESearch
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Default number of identifiers per EFetch request
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Configuration for [`crate::PubMedClient`] and [`crate::PaperFinder`]
///
/// # Example
///
/// ```
/// use pharma_papers::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("researcher@example.com")
///     .with_timeout_seconds(30);
///
/// assert_eq!(config.timeout.as_secs(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// NCBI API key appended to every request
    pub api_key: Option<String>,
    /// Contact email appended to every request
    pub email: Option<String>,
    /// Tool name reported to NCBI
    pub tool: Option<String>,
    /// Base URL override, mostly for tests against a mock server
    pub base_url: Option<String>,
    /// User agent override
    pub user_agent: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum identifiers requested from ESearch
    pub search_limit: usize,
    /// Identifiers per EFetch request
    pub batch_size: usize,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self {
            api_key: None,
            email: None,
            tool: None,
            base_url: None,
            user_agent: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            search_limit: DEFAULT_SEARCH_LIMIT,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_timeout(Duration::from_secs(seconds))
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Set the EFetch batch size (values below 1 are treated as 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pharma-papers/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Query parameters NCBI asks every client to send
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(ref api_key) = self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }

        if let Some(ref email) = self.email {
            params.push(("email".to_string(), email.clone()));
        }

        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
