use unicode_normalization::UnicodeNormalization;

/// Normalize text extracted from markup: NFC form, whitespace runs
/// collapsed to a single space, ends trimmed.
///
/// Definitions are full of accented letters and the service's markup is
/// indented, so both steps matter for stable comparisons.
pub fn normalize_text(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.split_whitespace().collect::<Vec<_>>().join(" ")
}
