use rae_model::{RaeError, RequestOptions, FETCH_ACTION, RAE_ENDPOINT, SEARCH_ACTION};
use rae_parse::evaluator::DEFAULT_LOOP_LIMIT;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_USER_AGENT: &str = concat!("rae/", env!("CARGO_PKG_VERSION"), " (dictionary client)");

/// Where and how the client talks to the service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, ending in `/` (e.g., "http://dle.rae.es/srv/").
    pub endpoint: String,
    /// Action for headword searches (e.g., "search?w=").
    pub search_action: String,
    /// Action for entry fetches (e.g., "fetch?id="). Also stripped from
    /// candidate links to recover entry ids.
    pub fetch_action: String,
    /// Applies to each request separately. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Iteration cap for each loop in a challenge program.
    pub loop_limit: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: RAE_ENDPOINT.to_string(),
            search_action: SEARCH_ACTION.to_string(),
            fetch_action: FETCH_ACTION.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            loop_limit: DEFAULT_LOOP_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check that the endpoint is an absolute http(s) URL and that both
    /// actions are set.
    pub fn validate(&self) -> Result<(), RaeError> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| RaeError::Config(format!("endpoint \"{}\": {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RaeError::Config(format!(
                "endpoint \"{}\" must use http or https",
                self.endpoint
            )));
        }
        if self.search_action.is_empty() || self.fetch_action.is_empty() {
            return Err(RaeError::Config("search and fetch actions must not be empty".into()));
        }
        if self.loop_limit == 0 {
            return Err(RaeError::Config("loop limit must be positive".into()));
        }
        Ok(())
    }

    pub fn search_options(&self) -> RequestOptions {
        RequestOptions::new(&self.endpoint, &self.search_action)
    }

    pub fn fetch_options(&self) -> RequestOptions {
        RequestOptions::new(&self.endpoint, &self.fetch_action)
    }
}
