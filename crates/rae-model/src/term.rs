use crate::error::RaeError;
use regex::Regex;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// A validated search term: one or more letters of the Spanish alphabet,
/// accented vowels, `ü` and `ñ` included, in either case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate `candidate`, normalizing it to NFC first so that decomposed
    /// accents (`e` + U+0301) are treated like their precomposed forms.
    pub fn new(candidate: &str) -> Result<Self, RaeError> {
        let nfc: String = candidate.nfc().collect();
        if is_valid_term(&nfc) {
            Ok(Self(nfc))
        } else {
            Err(RaeError::InvalidInput(candidate.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The character-set predicate behind [`SearchTerm::new`].
pub fn is_valid_term(candidate: &str) -> bool {
    let re = Regex::new(r"(?i)^[a-zñáéíóúü]+$").expect("valid regex");
    re.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terms() {
        assert!(is_valid_term("haber"));
        assert!(is_valid_term("Haber"));
        assert!(is_valid_term("ñandú"));
        assert!(is_valid_term("ÑANDÚ"));
        assert!(is_valid_term("pingüino"));
        assert!(is_valid_term("camión"));
    }

    #[test]
    fn test_invalid_terms() {
        assert!(!is_valid_term(""));
        assert!(!is_valid_term("h4ber"));
        assert!(!is_valid_term("haber!"));
        assert!(!is_valid_term("dos palabras"));
        assert!(!is_valid_term("crème"));
        assert!(!is_valid_term("ha-ber"));
    }

    #[test]
    fn test_decomposed_accent_is_normalized() {
        let term = SearchTerm::new("cami\u{006F}\u{0301}n").unwrap();
        assert_eq!(term.as_str(), "camión");
    }

    #[test]
    fn test_rejection_keeps_original_input() {
        let err = SearchTerm::new("123").unwrap_err();
        assert_eq!(err, RaeError::InvalidInput("123".into()));
    }
}
