//! Single-edit typo variants of a main label
//!
//! Labels are handled as `char`s so that a stray non-ASCII byte in the input
//! never splits a code point.

use crate::types::VariantKind;

/// Build a string from `chars` with `c` inserted before `index`
fn insert_at(chars: &[char], index: usize, c: char) -> String {
    let mut out = String::with_capacity(chars.len() + 1);
    out.extend(&chars[..index]);
    out.push(c);
    out.extend(&chars[index..]);
    out
}

/// Drop one character at every position. Empty for labels of length 1.
pub fn deletions(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= 1 {
        return Vec::new();
    }

    (0..chars.len())
        .map(|i| {
            chars
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, c)| *c)
                .collect()
        })
        .collect()
}

/// Swap every pair of adjacent characters
pub fn transpositions(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();

    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect()
        })
        .collect()
}

/// Lengthen existing runs of a repeated character by one
pub fn run_doublings(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();

    chars
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == pair[1])
        .map(|(i, pair)| insert_at(&chars, i + 1, pair[0]))
        .collect()
}

/// Duplicate each character in place
pub fn doublings(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| insert_at(&chars, i, c))
        .collect()
}

/// Insert each alphabet character at every position, including both ends
pub fn insertions(label: &str, alphabet: &[char]) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    let mut variations = Vec::with_capacity((chars.len() + 1) * alphabet.len());

    for i in 0..=chars.len() {
        for &c in alphabet {
            variations.push(insert_at(&chars, i, c));
        }
    }

    variations
}

/// All typo variants of `label`, tagged with the generator that produced them
pub fn typo_variants(label: &str, alphabet: &[char]) -> Vec<(VariantKind, String)> {
    let groups = [
        (VariantKind::Deletion, deletions(label)),
        (VariantKind::Transposition, transpositions(label)),
        (VariantKind::RunDoubling, run_doublings(label)),
        (VariantKind::Doubling, doublings(label)),
        (VariantKind::Insertion, insertions(label, alphabet)),
    ];

    groups
        .into_iter()
        .flat_map(|(kind, labels)| labels.into_iter().map(move |l| (kind, l)))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::INSERTION_CHARS;

    #[test]
    fn test_deletions() {
        let out = deletions("example");
        assert_eq!(out.len(), 7);
        assert!(out.contains(&"xample".to_string()));
        assert!(out.contains(&"exampl".to_string()));
        assert!(deletions("a").is_empty());
        assert!(deletions("").is_empty());
    }

    #[test]
    fn test_transpositions() {
        let out = transpositions("example");
        assert_eq!(out.len(), 6);
        assert!(out.contains(&"exapmle".to_string()));
        assert!(out.contains(&"xeample".to_string()));
        assert!(transpositions("a").is_empty());
    }

    #[test]
    fn test_run_doublings_only_fire_on_repeats() {
        assert!(run_doublings("example").is_empty());
        assert_eq!(run_doublings("google"), vec!["gooogle"]);
        assert_eq!(run_doublings("aaa"), vec!["aaaa", "aaaa"]);
    }

    #[test]
    fn test_doublings() {
        let out = doublings("abc");
        assert_eq!(out, vec!["aabc", "abbc", "abcc"]);
        assert_eq!(doublings("a"), vec!["aa"]);
    }

    #[test]
    fn test_insertions_count() {
        let out = insertions("bank", INSERTION_CHARS);
        assert_eq!(out.len(), 5 * INSERTION_CHARS.len());
        assert!(out.contains(&"abank".to_string()));
        assert!(out.contains(&"banks".to_string()));
        assert!(out.contains(&"baenk".to_string()));
    }

    #[test]
    fn test_single_character_label() {
        let out = typo_variants("a", INSERTION_CHARS);
        assert!(out.iter().all(|(k, _)| *k != VariantKind::Deletion));
        assert!(out.iter().all(|(k, _)| *k != VariantKind::Transposition));
        assert!(out.iter().any(|(k, _)| *k == VariantKind::Doubling));
        assert_eq!(
            out.iter().filter(|(k, _)| *k == VariantKind::Insertion).count(),
            2 * INSERTION_CHARS.len()
        );
    }

    #[test]
    fn test_non_ascii_label_does_not_panic() {
        let out = typo_variants("bäk", &['a']);
        assert!(out.iter().any(|(_, l)| l == "bk"));
        assert!(out.iter().any(|(_, l)| l == "äbk"));
    }
}
