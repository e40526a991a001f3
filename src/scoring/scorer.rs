//! Coverage scorer: matched/missing keyword partitions and match percentages

use crate::error::{Result, ResumeRadarError};
use crate::taxonomy::Taxonomy;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Scores text against one taxonomy. The Aho-Corasick automaton over the
/// lower-cased keyword set is built once per taxonomy and reused for every
/// scoring call.
pub struct CoverageScorer {
    taxonomy: Taxonomy,
    matcher: AhoCorasick,
    pattern_ids: HashMap<String, usize>,
}

/// Per-domain scoring outcome. `matched` and `missing` partition the
/// domain's keyword list exactly, in declared keyword order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCoverage {
    pub domain: String,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percent: u8,
}

/// Scoring outcome for one text against one taxonomy. Domains appear in
/// declared taxonomy order; domains excluded by a framework filter are
/// absent entirely rather than scored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub domains: Vec<DomainCoverage>,
    pub overall: u8,
}

impl CoverageResult {
    pub fn domain(&self, name: &str) -> Option<&DomainCoverage> {
        self.domains.iter().find(|d| d.domain == name)
    }

    /// (domain, percent) pairs in declared order, for chart rendering
    pub fn radar_points(&self) -> Vec<(&str, u8)> {
        self.domains
            .iter()
            .map(|d| (d.domain.as_str(), d.match_percent))
            .collect()
    }
}

impl CoverageScorer {
    /// Build a scorer for one taxonomy. The taxonomy is validated at
    /// construction, so keyword lists are known to be non-empty here.
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        // A keyword may appear in several domains; patterns are deduplicated
        // and resolved back through the id map when partitioning.
        let mut pattern_ids = HashMap::new();
        let mut patterns = Vec::new();
        for domain in &taxonomy.domains {
            for keyword in &domain.keywords {
                let lowered = keyword.to_lowercase();
                if !pattern_ids.contains_key(&lowered) {
                    pattern_ids.insert(lowered.clone(), patterns.len());
                    patterns.push(lowered);
                }
            }
        }

        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeRadarError::Taxonomy(format!(
                "Failed to build keyword matcher for '{}': {}",
                taxonomy.field, e
            ))
        })?;

        Ok(Self {
            taxonomy,
            matcher,
            pattern_ids,
        })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Score `text` against the taxonomy, optionally restricted to the
    /// domains of a named framework filter. An unknown framework name is
    /// treated as no filter.
    ///
    /// Matching is literal case-insensitive substring containment: a keyword
    /// counts as matched even mid-word ("SAML2024Report" matches "SAML").
    pub fn score(&self, text: &str, framework: Option<&str>) -> CoverageResult {
        let lowered = text.to_lowercase();
        let mut found: HashSet<usize> = HashSet::new();
        // Overlapping iteration so a keyword nested inside another keyword's
        // match is still seen ("oauth 2.0" must not shadow "auth").
        for mat in self.matcher.find_overlapping_iter(&lowered) {
            found.insert(mat.pattern().as_usize());
        }

        let filter = framework.and_then(|name| self.taxonomy.framework(name));

        let mut domains = Vec::new();
        for domain in &self.taxonomy.domains {
            if let Some(filter) = filter {
                if !filter.covers(&domain.name) {
                    continue;
                }
            }

            let mut matched = Vec::new();
            let mut missing = Vec::new();
            for keyword in &domain.keywords {
                let hit = self
                    .pattern_ids
                    .get(&keyword.to_lowercase())
                    .is_some_and(|id| found.contains(id));
                if hit {
                    matched.push(keyword.clone());
                } else {
                    missing.push(keyword.clone());
                }
            }

            let match_percent = percent(matched.len(), domain.keywords.len());
            domains.push(DomainCoverage {
                domain: domain.name.clone(),
                matched,
                missing,
                match_percent,
            });
        }

        let overall = if domains.is_empty() {
            0
        } else {
            let sum: u32 = domains.iter().map(|d| d.match_percent as u32).sum();
            (sum as f64 / domains.len() as f64).round() as u8
        };

        CoverageResult { domains, overall }
    }
}

/// Integer percentage, half rounds up. Callers guarantee `total > 0`.
fn percent(count: usize, total: usize) -> u8 {
    ((100.0 * count as f64) / total as f64).round() as u8
}
