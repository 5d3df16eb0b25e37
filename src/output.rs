//! Persisting generated candidates

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::GenerationOutcome;
use crate::error::{ForgeError, Result};
use crate::types::{OutputFormat, SkippedDomain, VariantKind};

/// JSON report of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generated_at: DateTime<Utc>,
    pub protected_domains: usize,
    pub skipped: Vec<SkippedDomain>,
    pub counts: BTreeMap<VariantKind, usize>,
    pub total: usize,
    /// Sorted lexicographically
    pub candidates: Vec<String>,
}

impl GenerationReport {
    pub fn from_outcome(outcome: &GenerationOutcome) -> Self {
        Self {
            generated_at: Utc::now(),
            protected_domains: outcome.processed,
            skipped: outcome.skipped.clone(),
            counts: outcome.counts.clone(),
            total: outcome.total(),
            candidates: outcome.candidates.sorted(),
        }
    }
}

/// Render the outcome in the requested format
pub fn render(outcome: &GenerationOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut content = String::new();
            for candidate in outcome.candidates.sorted() {
                content.push_str(&candidate);
                content.push('\n');
            }
            Ok(content)
        }
        OutputFormat::Json => {
            let report = GenerationReport::from_outcome(outcome);
            serde_json::to_string_pretty(&report)
                .map_err(|e| ForgeError::internal(format!("Failed to serialize report: {}", e)))
        }
    }
}

/// Write the outcome to `path`, creating parent directories as needed
pub fn write_outcome(path: &Path, outcome: &GenerationOutcome, format: OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
        })?;
    }

    let content = render(outcome, format)?;
    std::fs::write(path, content).map_err(|e| {
        ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    tracing::info!(
        path = %path.display(),
        format = %format,
        total = outcome.total(),
        "Wrote candidates"
    );
    Ok(())
}
