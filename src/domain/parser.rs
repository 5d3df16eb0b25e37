//! Naive domain parsing into main label and TLD
//!
//! The main label is always the second-to-last dot-separated label. This means
//! `sub.bank.com` and `www.bank.com` both yield `bank`, while compound suffixes
//! such as `co.uk` are misread: `bank.co.uk` yields main label `co` and TLD `uk`.
//! Callers that need public-suffix awareness must resolve it before parsing.

use crate::error::{ForgeError, Result};

/// A domain split into the part that gets mutated and its suffix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedDomain {
    pub main_label: String,
    pub tld: String,
}

/// Split `domain` into its main label and TLD.
///
/// Fails with [`ForgeError::Unparseable`] when the input is blank, has no dot,
/// or either resulting part is empty.
pub fn parse(domain: &str) -> Result<ParsedDomain> {
    if domain.trim().is_empty() {
        return Err(ForgeError::unparseable(domain, "domain is empty"));
    }

    let parts: Vec<&str> = domain.split('.').collect();
    if parts.len() < 2 {
        return Err(ForgeError::unparseable(domain, "domain must contain at least one dot"));
    }

    let tld = parts[parts.len() - 1];
    let main_label = parts[parts.len() - 2];

    if tld.is_empty() {
        return Err(ForgeError::unparseable(domain, "TLD cannot be empty"));
    }
    if main_label.is_empty() {
        return Err(ForgeError::unparseable(domain, "main label cannot be empty"));
    }

    Ok(ParsedDomain {
        main_label: main_label.to_string(),
        tld: tld.to_string(),
    })
}
