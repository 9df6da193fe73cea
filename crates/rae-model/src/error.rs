use thiserror::Error;

/// Every way a dictionary lookup can fail.
///
/// Parsers classify their faults into one of these kinds before returning,
/// so no raw interpreter or markup error ever reaches a caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RaeError {
    /// The search term failed the character-set predicate. Raised before
    /// any network activity.
    #[error("\"{0}\" is not a valid search term")]
    InvalidInput(String),

    /// Either HTTP phase came back with a non-success status or no
    /// response at all. The service gives no richer signal, so a missing
    /// word and a failing server look the same here.
    #[error("\"{0}\" not found in RAE")]
    NotFound(String),

    /// The initial page carried no recognizable challenge script. This
    /// usually means the service changed its page layout.
    #[error("no challenge script found; the RAE page layout may have changed")]
    ChallengeExtraction,

    /// Any other fault while parsing markup or evaluating the challenge.
    #[error("\"{0}\" parser error found")]
    Parser(String),

    /// The configured request timeout elapsed during either phase.
    #[error("request for \"{0}\" timed out")]
    Timeout(String),

    /// The client configuration is unusable.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl RaeError {
    /// Whether the failure points at a change in the upstream page format
    /// rather than at an ordinary miss.
    pub fn is_protocol_drift(&self) -> bool {
        matches!(self, RaeError::ChallengeExtraction | RaeError::Parser(_))
    }
}
