/// The authentication form sent back to the service in the second phase.
///
/// Fields keep the order in which they were inserted, so the serialized
/// body is deterministic for a given challenge page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeForm {
    fields: Vec<(String, String)>,
}

impl ChallengeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`. A repeated name replaces the earlier value
    /// in its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `key=value` pairs joined by `&`.
    ///
    /// Names and values go out verbatim; the service expects the challenge
    /// answer unescaped.
    pub fn to_form_body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
