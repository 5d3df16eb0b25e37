//! Lookalike Forge - typosquatting and phishing look-alike domain generation
//!
//! Takes a list of legitimate domains and produces a deduplicated set of
//! visually or typographically similar domains, useful for monitoring or
//! defensive pre-registration.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use config::ForgeConfig;
pub use domain::{parse, ParsedDomain, ProtectedDomain};
pub use engine::{GenerationOutcome, VariantEngine};
pub use error::{ForgeError, Result};
pub use output::GenerationReport;
pub use types::{OutputFormat, SkippedDomain, VariantKind};
pub use variants::{CandidateSet, HomoglyphMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
