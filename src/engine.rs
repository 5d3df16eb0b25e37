//! Variant engine: runs every generator over a list of protected domains

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::config::ForgeConfig;
use crate::domain::{parse, ParsedDomain};
use crate::types::{SkippedDomain, VariantKind};
use crate::variants::{expand_label, hyphenations, prefixed, typo_variants, CandidateSet};

/// Result of one generation pass
#[derive(Debug, Clone, Default)]
pub struct GenerationOutcome {
    /// Every unique candidate produced
    pub candidates: CandidateSet,
    /// Inputs that could not be parsed, in input order
    pub skipped: Vec<SkippedDomain>,
    /// Number of input domains seen, skipped ones included
    pub processed: usize,
    /// New candidates credited to the generator that first produced them
    pub counts: BTreeMap<VariantKind, usize>,
    pub duration: Duration,
}

impl GenerationOutcome {
    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn count(&self, kind: VariantKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    fn record(&mut self, kind: VariantKind, candidate: String) -> bool {
        let inserted = self.candidates.insert(candidate);
        if inserted {
            *self.counts.entry(kind).or_insert(0) += 1;
        }
        inserted
    }
}

/// Generates look-alike domains from a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct VariantEngine {
    config: ForgeConfig,
}

impl VariantEngine {
    pub fn new(config: ForgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    /// Process `domains` in order and collect every candidate
    pub fn generate<I, S>(&self, domains: I) -> GenerationOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generate_with(domains, |_| {})
    }

    /// Like [`generate`](Self::generate), calling `on_domain` after each input
    pub fn generate_with<I, S, F>(&self, domains: I, mut on_domain: F) -> GenerationOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str),
    {
        let start = Instant::now();
        let mut outcome = GenerationOutcome::default();

        for domain in domains {
            let domain = domain.as_ref();
            self.process_domain(domain, &mut outcome);
            on_domain(domain);
        }

        outcome.duration = start.elapsed();
        tracing::info!(
            processed = outcome.processed,
            skipped = outcome.skipped.len(),
            total = outcome.total(),
            duration_ms = %outcome.duration.as_millis(),
            "Generation completed"
        );
        outcome
    }

    /// Add all variants of a single domain to `outcome`.
    ///
    /// Unparseable domains are logged and recorded as skipped. Returns the number
    /// of candidates that were new to the set.
    pub fn process_domain(&self, domain: &str, outcome: &mut GenerationOutcome) -> usize {
        outcome.processed += 1;

        let parsed = match parse(domain) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(domain = %domain, error = %e, "Skipping unparseable domain");
                outcome.skipped.push(SkippedDomain {
                    domain: domain.to_string(),
                    reason: e.to_string(),
                });
                return 0;
            }
        };

        let before = outcome.total();

        for (kind, label) in self.label_variants(&parsed) {
            for candidate in expand_label(&label, &parsed.tld, &self.config.tlds) {
                outcome.record(kind, candidate);
            }
        }

        for candidate in prefixed(domain, &self.config.prefixes) {
            outcome.record(VariantKind::Prefix, candidate);
        }

        let added = outcome.total() - before;
        tracing::debug!(
            domain = %domain,
            main_label = %parsed.main_label,
            tld = %parsed.tld,
            added,
            "Processed domain"
        );
        added
    }

    /// Label variants of `parsed`, before TLD expansion.
    ///
    /// A whitespace-only main label yields nothing; the prefixer still runs on it.
    pub fn label_variants(&self, parsed: &ParsedDomain) -> Vec<(VariantKind, String)> {
        let label = parsed.main_label.as_str();
        if label.trim().is_empty() {
            return Vec::new();
        }

        let mut variants = typo_variants(label, &self.config.insertion_chars);

        variants.extend(
            hyphenations(label)
                .into_iter()
                .map(|l| (VariantKind::Hyphenation, l)),
        );
        variants.extend(
            self.config
                .homoglyphs
                .substitutions(label)
                .into_iter()
                .map(|l| (VariantKind::Homoglyph, l)),
        );

        if self.config.tld_swap {
            variants.push((VariantKind::TldSwap, label.to_string()));
        }

        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ForgeConfig {
        ForgeConfig {
            tlds: vec!["com".to_string(), "net".to_string()],
            prefixes: vec!["login-".to_string()],
            ..ForgeConfig::default()
        }
    }

    #[test]
    fn test_counts_sum_to_total() {
        let engine = VariantEngine::default();
        let outcome = engine.generate(["google.com", "paypal.com"]);
        let sum: usize = outcome.counts.values().sum();
        assert_eq!(sum, outcome.total());
        assert!(outcome.count(VariantKind::RunDoubling) > 0);
    }

    #[test]
    fn test_skip_is_recorded_and_processing_continues() {
        let engine = VariantEngine::new(small_config());
        let outcome = engine.generate(["localhost", "bank.com"]);
        assert_eq!(outcome.processed, 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].domain, "localhost");
        assert!(outcome.candidates.contains("login-bank.com"));
        assert!(!outcome.candidates.iter().any(|c| c.contains("localhost")));
    }

    #[test]
    fn test_tld_swap_toggle() {
        let parsed = parse("bank.com").unwrap();

        let off = VariantEngine::new(small_config());
        assert!(off
            .label_variants(&parsed)
            .iter()
            .all(|(k, _)| *k != VariantKind::TldSwap));

        let on = VariantEngine::new(small_config().with_tld_swap(true));
        let outcome = on.generate(["bank.com"]);
        assert!(outcome.candidates.contains("bank.net"));
        assert_eq!(outcome.count(VariantKind::TldSwap), 2);
    }

    #[test]
    fn test_blank_main_label_only_gets_prefixes() {
        let engine = VariantEngine::new(small_config());
        let outcome = engine.generate(["www. .com"]);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.total(), 1);
        assert!(outcome.candidates.contains("login-www. .com"));
        assert!(engine.label_variants(&parse("www. .com").unwrap()).is_empty());

        let no_prefixes = ForgeConfig {
            prefixes: Vec::new(),
            ..small_config()
        };
        assert_eq!(VariantEngine::new(no_prefixes).generate(["www. .com"]).total(), 0);
    }

    #[test]
    fn test_process_domain_returns_new_count() {
        let engine = VariantEngine::new(small_config());
        let mut outcome = GenerationOutcome::default();
        let first = engine.process_domain("bank.com", &mut outcome);
        assert_eq!(first, outcome.total());
        assert_eq!(engine.process_domain("bank.com", &mut outcome), 0);
    }
}
