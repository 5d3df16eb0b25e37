//! Reading and normalizing the list of protected domains

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

/// A legitimate domain to generate look-alikes for.
///
/// Always trimmed and lower-cased; never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtectedDomain(String);

impl ProtectedDomain {
    /// Normalize a raw line. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProtectedDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProtectedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse newline-separated input, dropping blank lines and keeping order
pub fn parse_domain_lines(content: &str) -> Vec<ProtectedDomain> {
    content.lines().filter_map(ProtectedDomain::new).collect()
}

/// Load protected domains from a text file, one per line
pub fn load_protected_domains(path: &Path) -> Result<Vec<ProtectedDomain>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let domains = parse_domain_lines(&content);
    tracing::debug!(
        path = %path.display(),
        count = domains.len(),
        "Loaded protected domains"
    );
    Ok(domains)
}
