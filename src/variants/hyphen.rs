//! Hyphen insertion

/// Insert a single `-` at every interior position of `label`.
///
/// Never at the start or end, so labels shorter than two characters yield nothing.
pub fn hyphenations(label: &str) -> Vec<String> {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= 1 {
        return Vec::new();
    }

    (1..chars.len())
        .map(|i| {
            let mut out: String = chars[..i].iter().collect();
            out.push('-');
            out.extend(&chars[i..]);
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_positions_only() {
        assert_eq!(hyphenations("bank"), vec!["b-ank", "ba-nk", "ban-k"]);
    }

    #[test]
    fn test_short_labels() {
        assert!(hyphenations("a").is_empty());
        assert!(hyphenations("").is_empty());
        assert_eq!(hyphenations("ab"), vec!["a-b"]);
    }
}
