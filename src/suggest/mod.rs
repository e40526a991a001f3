//! Templated improvement suggestions for missing keywords

use rand::Rng;

/// Sentence templates per security domain. Each template carries exactly one
/// `{keyword}` slot.
const AUTH_TEMPLATES: &[&str] = &[
    "Led implementation of {keyword} to enforce secure access across the enterprise.",
    "Improved {keyword} processes to support zero trust and role-based access models.",
    "Integrated {keyword} into IAM controls to enhance system security.",
    "Developed secure {keyword} mechanisms aligned with authentication best practices.",
    "Enhanced identity assurance via {keyword} within federated systems.",
];

const DATA_PROTECTION_TEMPLATES: &[&str] = &[
    "Implemented {keyword} to strengthen sensitive data handling practices.",
    "Conducted privacy impact assessments involving {keyword} across business units.",
    "Improved encryption posture using {keyword} techniques for data at rest and in transit.",
    "Aligned {keyword} strategy with HIPAA/GDPR compliance goals.",
    "Assessed and upgraded {keyword} controls to reduce risk of data exposure.",
];

const RISK_GOVERNANCE_TEMPLATES: &[&str] = &[
    "Performed enterprise-level assessments involving {keyword} to support compliance readiness.",
    "Built governance workflows incorporating {keyword} to manage risk effectively.",
    "Developed internal audit controls linked to {keyword} for policy enforcement.",
    "Created scalable documentation supporting {keyword} adoption across teams.",
    "Established controls around {keyword} to support continuous compliance monitoring.",
];

const SECURITY_OPS_TEMPLATES: &[&str] = &[
    "Integrated {keyword} with security monitoring infrastructure to support incident response.",
    "Improved threat visibility by embedding {keyword} into SOC workflows.",
    "Leveraged {keyword} to detect anomalies and respond to security events in real-time.",
    "Configured {keyword} within SIEM platform to enhance alerting precision.",
    "Evaluated {keyword} coverage to close detection gaps in production environments.",
];

const COMPLIANCE_TEMPLATES: &[&str] = &[
    "Mapped {keyword} controls to compliance objectives across frameworks like NIST, ISO, SOC 2.",
    "Integrated {keyword} into readiness assessment programs and audit prep.",
    "Correlated {keyword} efforts with evidence collection for annual audits.",
    "Reviewed {keyword} control maturity against regulatory frameworks.",
    "Contributed to audit success by validating {keyword} alignment with policy standards.",
];

const INTEGRATION_TEMPLATES: &[&str] = &[
    "Secured APIs and systems through hardened {keyword} design patterns.",
    "Validated {keyword} to prevent cross-domain vulnerabilities during integration.",
    "Applied {keyword} practices to support secure cloud-to-cloud communication.",
    "Assessed integration points for weaknesses in {keyword} configurations.",
    "Established encryption and access policies governing {keyword} pathways.",
];

const GENERIC_TEMPLATE: &str =
    "Applied {keyword} within {domain} to improve security maturity.";

/// Template bank for a domain, or None for domains that fall back to the
/// generic template.
pub fn templates_for(domain: &str) -> Option<&'static [&'static str]> {
    match domain {
        "Authentication & Authorization" => Some(AUTH_TEMPLATES),
        "Data Protection & Privacy" => Some(DATA_PROTECTION_TEMPLATES),
        "Risk Management & Governance" => Some(RISK_GOVERNANCE_TEMPLATES),
        "Security Operations & Monitoring" => Some(SECURITY_OPS_TEMPLATES),
        "Compliance Frameworks" => Some(COMPLIANCE_TEMPLATES),
        "Integration Security" => Some(INTEGRATION_TEMPLATES),
        _ => None,
    }
}

/// Selection strategy for picking among a domain's templates. Injectable so
/// suggestion output stays reproducible under test.
pub trait TemplateSelector {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform random pick per call; the production default
#[derive(Debug, Default)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same slot (modulo bank size); used in tests
#[derive(Debug)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Generates improvement sentences for missing keywords. Domains without a
/// template bank never fail; they use the fallback template.
pub struct SuggestionGenerator<S: TemplateSelector = RandomSelector> {
    selector: S,
    fallback: String,
}

impl SuggestionGenerator<RandomSelector> {
    pub fn new() -> Self {
        Self::with_selector(RandomSelector)
    }
}

impl Default for SuggestionGenerator<RandomSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSelector> SuggestionGenerator<S> {
    pub fn with_selector(selector: S) -> Self {
        Self {
            selector,
            fallback: GENERIC_TEMPLATE.to_string(),
        }
    }

    /// Replace the generic fallback template with a field-appropriate one.
    /// The template may use `{keyword}` and `{domain}` slots.
    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback = template.into();
        self
    }

    /// Suggestion for one missing keyword, picked from the domain's template
    /// bank (or the fallback template for unbanked domains).
    pub fn suggest(&mut self, keyword: &str, domain: &str) -> String {
        match templates_for(domain) {
            Some(bank) => {
                let idx = self.selector.pick(bank.len());
                fill(bank[idx], keyword, domain)
            }
            None => fill(&self.fallback, keyword, domain),
        }
    }

    /// Job-description-aware suggestion. With a focus term the sentence ties
    /// the keyword to the job description; without one it asks for a
    /// measurable example.
    pub fn suggest_with_focus(
        &mut self,
        keyword: &str,
        domain: &str,
        focus: Option<&str>,
    ) -> String {
        match focus {
            Some(focus) => format!(
                "Highlight your {} experience to support the job description's focus on \"{}\".",
                keyword, focus
            ),
            None => format!(
                "Include a measurable example of {} in your {} experience.",
                keyword, domain
            ),
        }
    }

    /// Affirmation for a domain with no missing keywords. When the job
    /// description still has gaps in this domain, one of them is surfaced.
    pub fn affirm(&mut self, domain: &str, job_gap: Option<&str>) -> String {
        match job_gap {
            Some(gap) => format!(
                "Strong coverage of {}; consider also speaking to \"{}\" from the job description.",
                domain, gap
            ),
            None => format!(
                "Strong coverage across {}; keep these skills prominent.",
                domain
            ),
        }
    }
}

/// Substitute template slots
fn fill(template: &str, keyword: &str, domain: &str) -> String {
    template
        .replace("{keyword}", keyword)
        .replace("{domain}", domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_selector_makes_output_reproducible() {
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let sentence = generator.suggest("SAML", "Authentication & Authorization");
        assert_eq!(
            sentence,
            "Led implementation of SAML to enforce secure access across the enterprise."
        );
    }

    #[test]
    fn random_pick_stays_within_the_template_bank() {
        let mut generator = SuggestionGenerator::new();
        let domain = "Security Operations & Monitoring";
        let expanded: Vec<String> = templates_for(domain)
            .unwrap()
            .iter()
            .map(|t| fill(t, "SIEM Integration", domain))
            .collect();

        for _ in 0..25 {
            let sentence = generator.suggest("SIEM Integration", domain);
            assert!(expanded.contains(&sentence), "unexpected sentence: {}", sentence);
        }
    }

    #[test]
    fn unbanked_domain_falls_back_to_generic_template() {
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(3));
        let sentence = generator.suggest("React", "Frontend Frameworks");
        assert_eq!(
            sentence,
            "Applied React within Frontend Frameworks to improve security maturity."
        );
    }

    #[test]
    fn fallback_template_is_configurable() {
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0))
            .with_fallback("Applied {keyword} within {domain} to strengthen your profile.");
        let sentence = generator.suggest("Hedging", "Treasury & Capital");
        assert_eq!(
            sentence,
            "Applied Hedging within Treasury & Capital to strengthen your profile."
        );
    }

    #[test]
    fn focus_term_shapes_the_job_aware_sentence() {
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(0));
        let with_focus = generator.suggest_with_focus("SAML", "Auth", Some("OAuth 2.0"));
        assert_eq!(
            with_focus,
            "Highlight your SAML experience to support the job description's focus on \"OAuth 2.0\"."
        );

        let without_focus = generator.suggest_with_focus("SAML", "Auth", None);
        assert_eq!(
            without_focus,
            "Include a measurable example of SAML in your Auth experience."
        );
    }

    #[test]
    fn affirmations_reference_job_gaps_when_present() {
        let mut generator = SuggestionGenerator::new();
        let with_gap = generator.affirm("Privacy", Some("Tokenization"));
        assert!(with_gap.contains("Privacy"));
        assert!(with_gap.contains("Tokenization"));

        let pure = generator.affirm("Privacy", None);
        assert!(pure.contains("Privacy"));
    }

    #[test]
    fn selector_index_wraps_around_the_bank() {
        let mut generator = SuggestionGenerator::with_selector(FixedSelector(5));
        // Bank has five entries; index 5 wraps to the first template.
        let sentence = generator.suggest("GDPR", "Compliance Frameworks");
        assert_eq!(
            sentence,
            "Mapped GDPR controls to compliance objectives across frameworks like NIST, ISO, SOC 2."
        );
    }
}
