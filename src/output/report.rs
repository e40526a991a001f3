//! Coverage report assembly: ratings, gap lists, suggestions, summary

use crate::scoring::{ComparisonResult, CoverageResult};
use crate::suggest::{SuggestionGenerator, TemplateSelector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating label for a match percentage. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Rating {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80..=100 => Rating::Excellent,
            60..=79 => Rating::Good,
            40..=59 => Rating::Fair,
            _ => Rating::NeedsWork,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::NeedsWork => "Needs Work",
        };
        write!(f, "{}", label)
    }
}

/// One generated improvement sentence. `keyword` is None for affirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub domain: String,
    pub keyword: Option<String>,
    pub text: String,
}

/// Per-domain report entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainReport {
    pub name: String,
    pub match_percent: u8,
    pub rating: Rating,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Where the report came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub field: String,
    pub framework: Option<String>,
    pub resume_file: String,
    pub job_file: Option<String>,
}

/// Inputs identifying one analysis run
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    pub field: String,
    pub framework: Option<String>,
    pub resume_file: String,
    pub job_file: Option<String>,
}

/// The assembled report: everything the presentation layer needs, as plain
/// data. Per-domain percentages double as the radar chart points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub metadata: ReportMetadata,
    pub overall: u8,
    pub overall_rating: Rating,
    pub domains: Vec<DomainReport>,
    pub suggestions: Vec<Suggestion>,
    pub summary: String,
    /// Job description coverage, when a comparison was requested
    pub job: Option<CoverageResult>,
}

impl CoverageReport {
    /// Assemble a report from a single-text scoring result. One suggestion
    /// per missing keyword, in domain-then-keyword order.
    pub fn from_result<S: TemplateSelector>(
        result: CoverageResult,
        generator: &mut SuggestionGenerator<S>,
        context: ReportContext,
    ) -> Self {
        let mut suggestions = Vec::new();
        for coverage in &result.domains {
            for keyword in &coverage.missing {
                suggestions.push(Suggestion {
                    domain: coverage.domain.clone(),
                    keyword: Some(keyword.clone()),
                    text: generator.suggest(keyword, &coverage.domain),
                });
            }
        }

        let summary = format!(
            "Your resume covers {}% of the {} keyword set.",
            result.overall, context.field
        );

        Self::assemble(result, None, suggestions, summary, context)
    }

    /// Assemble a report from a resume/job-description comparison. Missing
    /// keywords get focus-aware suggestions; fully covered domains get an
    /// affirmation, pointing at a remaining job-description gap when one
    /// exists.
    pub fn from_comparison<S: TemplateSelector>(
        comparison: ComparisonResult,
        generator: &mut SuggestionGenerator<S>,
        context: ReportContext,
    ) -> Self {
        let mut suggestions = Vec::new();
        for coverage in &comparison.resume.domains {
            if coverage.missing.is_empty() {
                let job_gap = comparison
                    .job
                    .domain(&coverage.domain)
                    .and_then(|d| d.missing.first())
                    .map(|k| k.as_str());
                suggestions.push(Suggestion {
                    domain: coverage.domain.clone(),
                    keyword: None,
                    text: generator.affirm(&coverage.domain, job_gap),
                });
                continue;
            }

            let focus = comparison.focus_term(&coverage.domain).map(str::to_owned);
            for keyword in &coverage.missing {
                suggestions.push(Suggestion {
                    domain: coverage.domain.clone(),
                    keyword: Some(keyword.clone()),
                    text: generator.suggest_with_focus(keyword, &coverage.domain, focus.as_deref()),
                });
            }
        }

        let summary = format!(
            "Your resume covers {}% of the {} keyword set; the job description covers {}%.",
            comparison.resume.overall, context.field, comparison.job.overall
        );

        let ComparisonResult { resume, job } = comparison;
        Self::assemble(resume, Some(job), suggestions, summary, context)
    }

    fn assemble(
        result: CoverageResult,
        job: Option<CoverageResult>,
        suggestions: Vec<Suggestion>,
        summary: String,
        context: ReportContext,
    ) -> Self {
        let domains = result
            .domains
            .into_iter()
            .map(|coverage| DomainReport {
                rating: Rating::from_percent(coverage.match_percent),
                name: coverage.domain,
                match_percent: coverage.match_percent,
                matched: coverage.matched,
                missing: coverage.missing,
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                field: context.field,
                framework: context.framework,
                resume_file: context.resume_file,
                job_file: context.job_file,
            },
            overall: result.overall,
            overall_rating: Rating::from_percent(result.overall),
            domains,
            suggestions,
            summary,
            job,
        }
    }

    /// (domain, percent) pairs for the external chart renderer
    pub fn radar_points(&self) -> Vec<(&str, u8)> {
        self.domains
            .iter()
            .map(|d| (d.name.as_str(), d.match_percent))
            .collect()
    }

    /// Total count of missing keywords across included domains
    pub fn gap_count(&self) -> usize {
        self.domains.iter().map(|d| d.missing.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CoverageScorer;
    use crate::suggest::FixedSelector;
    use crate::taxonomy::{Domain, Taxonomy};

    fn scorer() -> CoverageScorer {
        let taxonomy = Taxonomy::new(
            "Test",
            vec![
                Domain::new("Auth", &["OAuth 2.0", "SAML"]),
                Domain::new("Privacy", &["GDPR", "Tokenization"]),
            ],
            vec![],
        )
        .unwrap();
        CoverageScorer::new(taxonomy).unwrap()
    }

    fn context() -> ReportContext {
        ReportContext {
            field: "Test".to_string(),
            framework: None,
            resume_file: "resume.txt".to_string(),
            job_file: None,
        }
    }

    #[test]
    fn rating_thresholds_are_inclusive_at_lower_bounds() {
        assert_eq!(Rating::from_percent(100), Rating::Excellent);
        assert_eq!(Rating::from_percent(80), Rating::Excellent);
        assert_eq!(Rating::from_percent(79), Rating::Good);
        assert_eq!(Rating::from_percent(60), Rating::Good);
        assert_eq!(Rating::from_percent(59), Rating::Fair);
        assert_eq!(Rating::from_percent(40), Rating::Fair);
        assert_eq!(Rating::from_percent(39), Rating::NeedsWork);
        assert_eq!(Rating::from_percent(0), Rating::NeedsWork);
    }

    #[test]
    fn rating_labels_render_exactly() {
        assert_eq!(Rating::Excellent.to_string(), "Excellent");
        assert_eq!(Rating::NeedsWork.to_string(), "Needs Work");
    }

    #[test]
    fn suggestions_follow_domain_then_keyword_order() {
        let result = scorer().score("", None);
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_result(result, &mut generator, context());

        let keywords: Vec<&str> = report
            .suggestions
            .iter()
            .map(|s| s.keyword.as_deref().unwrap())
            .collect();
        assert_eq!(keywords, vec!["OAuth 2.0", "SAML", "GDPR", "Tokenization"]);
    }

    #[test]
    fn summary_interpolates_overall_percentage() {
        let result = scorer().score("OAuth 2.0 and GDPR", None);
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_result(result, &mut generator, context());

        assert_eq!(report.overall, 50);
        assert_eq!(report.summary, "Your resume covers 50% of the Test keyword set.");
        assert_eq!(report.gap_count(), 2);
    }

    #[test]
    fn comparison_summary_includes_both_percentages() {
        let comparison = scorer().compare("OAuth 2.0 and GDPR", "SAML required", None);
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_comparison(comparison, &mut generator, context());

        assert!(report.summary.contains("50%"));
        assert!(report.summary.contains("25%"));
        assert!(report.job.is_some());
    }

    #[test]
    fn comparison_suggestions_carry_the_focus_term() {
        // Job matches SAML in Auth, so Auth's missing keywords reference it.
        let comparison = scorer().compare("OAuth 2.0", "SAML shop", None);
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_comparison(comparison, &mut generator, context());

        let saml = report
            .suggestions
            .iter()
            .find(|s| s.keyword.as_deref() == Some("SAML"))
            .unwrap();
        assert!(saml.text.contains("focus on \"SAML\""));
    }

    #[test]
    fn fully_covered_domain_gets_an_affirmation() {
        let comparison = scorer().compare(
            "OAuth 2.0, SAML, GDPR resume",
            "Needs Tokenization",
            None,
        );
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_comparison(comparison, &mut generator, context());

        let auth = report
            .suggestions
            .iter()
            .find(|s| s.domain == "Auth")
            .unwrap();
        assert!(auth.keyword.is_none());
        // Job description matched SAML but not OAuth 2.0 in Auth
        assert!(auth.text.contains("OAuth 2.0"));
    }

    #[test]
    fn radar_points_mirror_domain_percentages() {
        let result = scorer().score("OAuth 2.0 and SAML", None);
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let report = CoverageReport::from_result(result, &mut generator, context());

        assert_eq!(report.radar_points(), vec![("Auth", 100), ("Privacy", 0)]);
        assert_eq!(report.domains[0].rating, Rating::Excellent);
        assert_eq!(report.domains[1].rating, Rating::NeedsWork);
    }
}
