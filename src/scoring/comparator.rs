//! Dual-text comparison: resume and job description scored side by side

use crate::scoring::scorer::{CoverageResult, CoverageScorer};
use serde::{Deserialize, Serialize};

/// Paired scoring results for a resume and a job description against the
/// same taxonomy. The job description side never applies a framework
/// filter; callers decide whether to suppress an all-zero job result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub resume: CoverageResult,
    pub job: CoverageResult,
}

impl CoverageScorer {
    /// Score both texts independently. An empty job description is valid
    /// input and yields an all-missing, 0% result rather than failing.
    pub fn compare(
        &self,
        resume_text: &str,
        job_text: &str,
        framework: Option<&str>,
    ) -> ComparisonResult {
        ComparisonResult {
            resume: self.score(resume_text, framework),
            job: self.score(job_text, None),
        }
    }
}

impl ComparisonResult {
    /// Focus term for a domain, drawn from the job description side: the
    /// first matched keyword, or if none matched, the first missing one.
    /// None only when the domain is absent from the job result.
    pub fn focus_term(&self, domain: &str) -> Option<&str> {
        let coverage = self.job.domain(domain)?;
        coverage
            .matched
            .first()
            .or_else(|| coverage.missing.first())
            .map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{Domain, FrameworkFilter, Taxonomy};

    fn scorer() -> CoverageScorer {
        let taxonomy = Taxonomy::new(
            "Test",
            vec![
                Domain::new("Auth", &["OAuth 2.0", "SAML"]),
                Domain::new("Privacy", &["GDPR", "Tokenization"]),
            ],
            vec![FrameworkFilter::new("GDPR", &["Privacy"])],
        )
        .unwrap();
        CoverageScorer::new(taxonomy).unwrap()
    }

    #[test]
    fn both_sides_are_scored_independently() {
        let comparison = scorer().compare(
            "Resume mentions SAML only.",
            "Job wants OAuth 2.0 and GDPR.",
            None,
        );

        assert_eq!(comparison.resume.domain("Auth").unwrap().matched, vec!["SAML"]);
        assert_eq!(comparison.job.domain("Auth").unwrap().matched, vec!["OAuth 2.0"]);
        assert_eq!(comparison.job.domain("Privacy").unwrap().matched, vec!["GDPR"]);
    }

    #[test]
    fn framework_filter_applies_to_resume_side_only() {
        let comparison = scorer().compare("SAML and GDPR", "SAML and GDPR", Some("GDPR"));
        assert_eq!(comparison.resume.domains.len(), 1);
        assert_eq!(comparison.job.domains.len(), 2);
    }

    #[test]
    fn empty_job_text_scores_deterministically() {
        let comparison = scorer().compare("SAML", "", None);
        assert_eq!(comparison.job.overall, 0);
        for coverage in &comparison.job.domains {
            assert!(coverage.matched.is_empty());
        }
    }

    #[test]
    fn focus_term_prefers_first_matched_keyword() {
        let comparison = scorer().compare("", "Requires SAML and Tokenization.", None);
        // Auth: SAML matched; Privacy: nothing matched, GDPR is first missing
        assert_eq!(comparison.focus_term("Auth"), Some("SAML"));
        assert_eq!(comparison.focus_term("Privacy"), Some("Tokenization"));
    }

    #[test]
    fn focus_term_falls_back_to_first_missing() {
        let comparison = scorer().compare("", "", None);
        assert_eq!(comparison.focus_term("Auth"), Some("OAuth 2.0"));
        assert_eq!(comparison.focus_term("Privacy"), Some("GDPR"));
    }

    #[test]
    fn focus_term_is_none_for_unknown_domain() {
        let comparison = scorer().compare("", "", None);
        assert_eq!(comparison.focus_term("Nope"), None);
    }
}
