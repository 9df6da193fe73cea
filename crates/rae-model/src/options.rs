/// Base URL of the official DLE service.
pub const RAE_ENDPOINT: &str = "http://dle.rae.es/srv/";

/// Path segment for a headword search; the term is appended to it.
pub const SEARCH_ACTION: &str = "search?w=";

/// Path segment for fetching one entry; the entry id is appended to it.
/// Links on disambiguation pages carry this same prefix.
pub const FETCH_ACTION: &str = "fetch?id=";

/// Where one lookup is sent: `endpoint + action + query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub endpoint: String,
    pub action: String,
}

impl RequestOptions {
    pub fn new(endpoint: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            action: action.into(),
        }
    }

    pub fn search() -> Self {
        Self::new(RAE_ENDPOINT, SEARCH_ACTION)
    }

    pub fn fetch() -> Self {
        Self::new(RAE_ENDPOINT, FETCH_ACTION)
    }

    /// The unencoded target URL for `query`.
    pub fn url_for(&self, query: &str) -> String {
        format!("{}{}{}", self.endpoint, self.action, query)
    }
}
