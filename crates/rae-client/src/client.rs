use crate::config::ClientConfig;
use crate::protocol::Retriever;
use crate::transport::{HttpTransport, ReqwestTransport};
use async_trait::async_trait;
use rae_model::{RaeError, RetrievalResult, SearchTerm};
use rae_parse::{BoaEvaluator, ChallengeEvaluator};
use std::sync::Arc;

/// Dictionary lookups.
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a headword. Fails with [`RaeError::InvalidInput`] before any
    /// network activity when `term` is not a word.
    async fn search(&self, term: &str) -> Result<RetrievalResult, RaeError>;

    /// Fetch one entry by the id a disambiguation result handed out.
    async fn fetch_by_id(&self, id: &str) -> Result<RetrievalResult, RaeError>;
}

/// The HTTP dictionary client.
pub struct RaeClient<T = ReqwestTransport> {
    config: ClientConfig,
    retriever: Retriever<T>,
}

impl RaeClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, RaeError> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> RaeClient<T> {
    /// Build a client over any transport, with the Boa evaluator.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, RaeError> {
        config.validate()?;
        let evaluator: Arc<dyn ChallengeEvaluator> =
            Arc::new(BoaEvaluator::with_loop_limit(config.loop_limit));
        let retriever = Retriever::new(transport, evaluator, config.fetch_action.clone());
        Ok(Self { config, retriever })
    }

    /// Replace the challenge evaluator.
    pub fn with_evaluator(mut self, evaluator: Arc<dyn ChallengeEvaluator>) -> Self {
        self.retriever.set_evaluator(evaluator);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl<T: HttpTransport> Dictionary for RaeClient<T> {
    async fn search(&self, term: &str) -> Result<RetrievalResult, RaeError> {
        let term = SearchTerm::new(term)?;
        tracing::info!(term = %term, "Searching");
        self.retriever
            .retrieve(term.as_str(), &self.config.search_options())
            .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RetrievalResult, RaeError> {
        tracing::info!(id = %id, "Fetching entry");
        self.retriever
            .retrieve(id, &self.config.fetch_options())
            .await
    }
}
