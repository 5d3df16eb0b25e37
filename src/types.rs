//! Core types shared by the engine and its collaborators

use serde::{Deserialize, Serialize};

/// Which generator produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Deletion,
    Transposition,
    RunDoubling,
    Doubling,
    Insertion,
    Hyphenation,
    Homoglyph,
    Prefix,
    TldSwap,
}

impl VariantKind {
    /// All kinds, in the order the engine runs them
    pub const ALL: [VariantKind; 9] = [
        VariantKind::Deletion,
        VariantKind::Transposition,
        VariantKind::RunDoubling,
        VariantKind::Doubling,
        VariantKind::Insertion,
        VariantKind::Hyphenation,
        VariantKind::Homoglyph,
        VariantKind::Prefix,
        VariantKind::TldSwap,
    ];
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantKind::Deletion => write!(f, "deletion"),
            VariantKind::Transposition => write!(f, "transposition"),
            VariantKind::RunDoubling => write!(f, "run_doubling"),
            VariantKind::Doubling => write!(f, "doubling"),
            VariantKind::Insertion => write!(f, "insertion"),
            VariantKind::Hyphenation => write!(f, "hyphenation"),
            VariantKind::Homoglyph => write!(f, "homoglyph"),
            VariantKind::Prefix => write!(f, "prefix"),
            VariantKind::TldSwap => write!(f, "tld_swap"),
        }
    }
}

/// An input domain the engine could not parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDomain {
    pub domain: String,
    pub reason: String,
}

/// Output format for persisted candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line
    #[default]
    Text,
    /// Full generation report
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_kind_display_matches_serde() {
        for kind in VariantKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
