use crate::transport::{HttpResponse, HttpTransport, TransportError};
use rae_model::{RaeError, RequestOptions, RetrievalResult};
use rae_parse::{parse_challenge_with, parse_result_with, ChallengeEvaluator};
use std::sync::Arc;

/// The two-phase exchange behind every lookup.
///
/// Holds no per-lookup state, so one `Retriever` can serve any number of
/// concurrent lookups.
pub struct Retriever<T> {
    transport: T,
    evaluator: Arc<dyn ChallengeEvaluator>,
    fetch_action: String,
}

impl<T: HttpTransport> Retriever<T> {
    /// `fetch_action` is stripped from candidate links on disambiguation
    /// pages, whatever action the lookup itself used.
    pub fn new(
        transport: T,
        evaluator: Arc<dyn ChallengeEvaluator>,
        fetch_action: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            evaluator,
            fetch_action: fetch_action.into(),
        }
    }

    pub fn set_evaluator(&mut self, evaluator: Arc<dyn ChallengeEvaluator>) {
        self.evaluator = evaluator;
    }

    /// GET the challenge, solve it, POST the form to the same URL and parse
    /// what comes back. Nothing is retried.
    pub async fn retrieve(
        &self,
        query: &str,
        options: &RequestOptions,
    ) -> Result<RetrievalResult, RaeError> {
        let url = target_url(query, options)?;

        tracing::info!(url = %url, "Requesting challenge");
        let challenge_page = accept(query, "challenge", self.transport.get(&url).await)?;

        // Parsing and evaluation are CPU-bound; keep them off the async workers.
        let evaluator = Arc::clone(&self.evaluator);
        let form = tokio::task::spawn_blocking(move || {
            parse_challenge_with(&challenge_page, evaluator.as_ref())
        })
        .await
        .map_err(|e| RaeError::Parser(e.to_string()))??;

        tracing::info!(url = %url, fields = form.len(), "Submitting solved challenge");
        let result_page = accept(
            query,
            "result",
            self.transport.post_form(&url, form.to_form_body()).await,
        )?;

        let result = parse_result_with(&result_page, &self.fetch_action)?;
        tracing::info!(
            query = %query,
            multiple = result.multiple_matches(),
            items = result.len(),
            "Parsed result"
        );
        Ok(result)
    }
}

/// `endpoint + action + query`, with the query percent-encoded.
fn target_url(query: &str, options: &RequestOptions) -> Result<String, RaeError> {
    let raw = options.url_for(query);
    let url = reqwest::Url::parse(&raw)
        .map_err(|e| RaeError::Config(format!("cannot build URL \"{raw}\": {e}")))?;
    Ok(url.to_string())
}

/// Body of a successful response; anything else fails the lookup.
fn accept(
    query: &str,
    phase: &str,
    response: Result<HttpResponse, TransportError>,
) -> Result<String, RaeError> {
    match response {
        Ok(response) if response.is_success() => Ok(response.body),
        Ok(response) => {
            tracing::warn!(query = %query, phase, status = response.status, "Non-success status");
            Err(RaeError::NotFound(query.to_string()))
        }
        Err(TransportError::Timeout(e)) => {
            tracing::warn!(query = %query, phase, error = %e, "Request timed out");
            Err(RaeError::Timeout(query.to_string()))
        }
        Err(TransportError::Request(e)) => {
            tracing::warn!(query = %query, phase, error = %e, "No response");
            Err(RaeError::NotFound(query.to_string()))
        }
    }
}
