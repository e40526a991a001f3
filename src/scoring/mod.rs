//! Keyword coverage scoring
//! Pure, deterministic scoring of free text against a field taxonomy

pub mod comparator;
pub mod scorer;

pub use comparator::ComparisonResult;
pub use scorer::{CoverageResult, CoverageScorer, DomainCoverage};
