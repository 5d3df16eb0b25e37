//! Phishing prefix decoration

/// Prepend every prefix to the full original domain, without re-expanding its TLD
pub fn prefixed<S: AsRef<str>>(domain: &str, prefixes: &[S]) -> Vec<String> {
    if domain.trim().is_empty() {
        return Vec::new();
    }

    prefixes
        .iter()
        .map(|prefix| format!("{}{}", prefix.as_ref(), domain))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PHISHING_PREFIXES;

    #[test]
    fn test_prefixes_applied_verbatim() {
        let out = prefixed("bank.com", PHISHING_PREFIXES);
        assert_eq!(out.len(), PHISHING_PREFIXES.len());
        assert_eq!(out[0], "login-bank.com");
        assert!(out.contains(&"secure-bank.com".to_string()));
    }

    #[test]
    fn test_subdomain_kept_whole() {
        let out = prefixed("www.bank.co.uk", &["my-"]);
        assert_eq!(out, vec!["my-www.bank.co.uk"]);
    }

    #[test]
    fn test_blank_domain() {
        assert!(prefixed("  ", PHISHING_PREFIXES).is_empty());
    }
}
