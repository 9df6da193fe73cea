use serde::{Deserialize, Serialize};

/// One paragraph of a single entry, typically one numbered sense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sense {
    pub text: String,
}

/// One candidate entry on a disambiguation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    /// Headword as shown in the list (e.g., "haber1").
    pub text: String,
    /// Entry id, retrievable with a fetch-by-id lookup.
    pub id: String,
}

/// The outcome of one lookup.
///
/// A term matching one headword comes back as `Single`, with one item per
/// paragraph of the entry. A term matching several headwords comes back as
/// `Disambiguation`, every item carrying the id needed to fetch it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RetrievalResult {
    Single { items: Vec<Sense> },
    Disambiguation { items: Vec<Candidate> },
}

/// Flat view of a result item: `id` is present only for candidates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEntry {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RetrievalResult {
    /// A single-entry result with no paragraphs, i.e. nothing matched.
    pub fn empty() -> Self {
        RetrievalResult::Single { items: Vec::new() }
    }

    pub fn multiple_matches(&self) -> bool {
        matches!(self, RetrievalResult::Disambiguation { .. })
    }

    pub fn len(&self) -> usize {
        match self {
            RetrievalResult::Single { items } => items.len(),
            RetrievalResult::Disambiguation { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items in document order, flattened to [`MatchEntry`].
    pub fn entries(&self) -> Vec<MatchEntry> {
        match self {
            RetrievalResult::Single { items } => items
                .iter()
                .map(|s| MatchEntry {
                    text: s.text.clone(),
                    id: None,
                })
                .collect(),
            RetrievalResult::Disambiguation { items } => items
                .iter()
                .map(|c| MatchEntry {
                    text: c.text.clone(),
                    id: Some(c.id.clone()),
                })
                .collect(),
        }
    }
}
