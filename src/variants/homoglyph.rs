//! ASCII homoglyph substitution

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::HOMOGLYPHS;

/// Letter to look-alike character table.
///
/// Serialized as a JSON object of one-character strings, e.g. `{"o": "0"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomoglyphMap(BTreeMap<char, char>);

impl HomoglyphMap {
    pub fn new(entries: impl IntoIterator<Item = (char, char)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn get(&self, c: char) -> Option<char> {
        self.0.get(&c).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// One variant per mappable position, each with exactly that position replaced
    pub fn substitutions(&self, label: &str) -> Vec<String> {
        let chars: Vec<char> = label.chars().collect();

        chars
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| {
                let replacement = self.get(c)?;
                let mut substituted = chars.clone();
                substituted[i] = replacement;
                Some(substituted.into_iter().collect())
            })
            .collect()
    }
}

impl Default for HomoglyphMap {
    fn default() -> Self {
        Self::new(HOMOGLYPHS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_substitution_per_variant() {
        let map = HomoglyphMap::default();
        let out = map.substitutions("example");
        assert!(out.contains(&"3xample".to_string()));
        assert!(out.contains(&"ex4mple".to_string()));
        assert!(out.contains(&"examp1e".to_string()));
        assert!(!out.contains(&"3x4mple".to_string()));
        assert!(!out.contains(&"examp13".to_string()));
        // e, a, l, e
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_unmapped_label() {
        let map = HomoglyphMap::default();
        assert!(map.substitutions("xyz").is_empty());
    }

    #[test]
    fn test_json_round_trip_shape() {
        let map = HomoglyphMap::new([('o', '0')]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"o":"0"}"#);
        let parsed: HomoglyphMap = serde_json::from_str(r#"{"g":"9","b":"8"}"#).unwrap();
        assert_eq!(parsed.get('g'), Some('9'));
        assert_eq!(parsed.len(), 2);
    }
}
