use std::collections::HashMap;
use tracing::warn;

/// Abbreviation table built from `FROM=TO` lines.
///
/// Keeps three views of the same pairs: the exact-case lookup, the
/// uppercase lookup, and the entries in first-seen order for the substring
/// fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameMapping {
    entries: Vec<(String, String)>,
    exact: HashMap<String, String>,
    upper: HashMap<String, String>,
}

impl NameMapping {
    pub fn parse(text: &str) -> Self {
        let mut mapping = Self::default();

        for (line_no, line) in text.lines().enumerate() {
            let mut parts = line.split('=');
            let from = parts.next().map(str::trim).unwrap_or_default();
            let to = parts.next().map(str::trim).unwrap_or_default();

            if from.is_empty() || to.is_empty() {
                if !line.trim().is_empty() {
                    warn!(line = line_no + 1, "skipping malformed name mapping line");
                }
                continue;
            }
            mapping.insert(from, to);
        }

        mapping
    }

    /// Later duplicates overwrite the value but keep the first position.
    pub fn insert(&mut self, from: &str, to: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == from) {
            Some(entry) => entry.1 = to.to_string(),
            None => self.entries.push((from.to_string(), to.to_string())),
        }
        self.exact.insert(from.to_string(), to.to_string());
        self.upper.insert(from.to_uppercase(), to.to_string());
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Renders the table back into `FROM=TO` lines.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|(from, to)| format!("{}={}", from, to))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Resolves a raw name token to its canonical name.
    ///
    /// Order: exact match, uppercase match, then the first entry (in
    /// insertion order) whose key contains the token or is contained by it.
    /// Unmatched tokens pass through trimmed. `None` only for empty input.
    pub fn resolve(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }

        let trimmed = token.trim();
        let upper = trimmed.to_uppercase();

        if let Some(name) = self.exact.get(trimmed) {
            return Some(name.clone());
        }
        if let Some(name) = self.upper.get(&upper) {
            return Some(name.clone());
        }

        // First hit wins, not the longest key.
        for (key, value) in &self.entries {
            let key_upper = key.to_uppercase();
            if upper.contains(&key_upper) || key_upper.contains(&upper) {
                return Some(value.clone());
            }
        }

        Some(trimmed.to_string())
    }
}

/// True for tokens that read like an initial or a short surname
/// continuation: one or two ASCII letters, or one letter and a period.
pub fn is_likely_initial(word: &str) -> bool {
    let bytes = word.as_bytes();
    match bytes {
        [a] => a.is_ascii_alphabetic(),
        [a, b] => a.is_ascii_alphabetic() && (b.is_ascii_alphabetic() || *b == b'.'),
        _ => false,
    }
}
