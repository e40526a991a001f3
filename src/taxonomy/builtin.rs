//! Built-in field taxonomies
//!
//! Static configuration consumed at startup. The cyber security field also
//! defines compliance framework filters; the other fields do not.

use super::{Domain, FrameworkFilter, Taxonomy};

pub const CYBER_SECURITY: &str = "Cyber Security";
pub const WEB_DEVELOPMENT: &str = "Web Development";
pub const FINANCE: &str = "Finance";

/// All built-in taxonomies, in presentation order
pub fn all() -> Vec<Taxonomy> {
    vec![cyber_security(), web_development(), finance()]
}

/// Look up a built-in taxonomy by field name, case-insensitively.
/// Accepts "cyber-security" style slugs as well as display names.
pub fn by_field(name: &str) -> Option<Taxonomy> {
    let wanted = slug(name);
    all().into_iter().find(|t| slug(&t.field) == wanted)
}

fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Cyber security taxonomy with compliance framework filters
pub fn cyber_security() -> Taxonomy {
    let domains = vec![
        Domain::new(
            "Authentication & Authorization",
            &[
                "Multi-Factor Authentication",
                "Single Sign-On",
                "Identity Federation",
                "OAuth 2.0",
                "SAML",
                "Zero Trust Architecture",
                "Role-Based Access Control",
                "Privileged Access Management",
                "Authorization Models",
                "Directory Services",
                "LDAP Integration",
                "Conditional Access",
                "Least Privilege",
            ],
        ),
        Domain::new(
            "Data Protection & Privacy",
            &[
                "Data Encryption at Rest",
                "Data Encryption in Transit",
                "Key Management",
                "Tokenization",
                "Data Loss Prevention",
                "Database Security",
                "Field-Level Security",
                "End-to-End Encryption",
                "Data Retention Policies",
                "Data Minimization",
                "Confidentiality Controls",
                "Privacy Impact Assessment",
                "GDPR Compliance",
                "HIPAA Compliance",
            ],
        ),
        Domain::new(
            "Risk Management & Governance",
            &[
                "Risk Assessment",
                "Vulnerability Management",
                "Security Risk Scoring",
                "Business Continuity Planning",
                "Disaster Recovery Planning",
                "Incident Response Planning",
                "Threat Modeling",
                "Third-Party Risk Management",
                "Vendor Risk Assessment",
                "Compliance Gap Analysis",
                "Audit Readiness",
                "Governance, Risk, and Compliance",
            ],
        ),
        Domain::new(
            "Security Operations & Monitoring",
            &[
                "Event Monitoring",
                "SIEM Integration",
                "Threat Detection",
                "Insider Threat Management",
                "Incident Response",
                "Anomaly Detection",
                "Real-Time Monitoring",
                "Alerting & Escalation Procedures",
                "Security Operations Center",
                "Security Incident Event Management",
            ],
        ),
        Domain::new(
            "Compliance Frameworks",
            &[
                "NIST 800-53",
                "NIST CSF",
                "ISO 27001",
                "SOC 2 Type I",
                "SOC 2 Type II",
                "GDPR",
                "HIPAA",
                "PCI-DSS",
                "FedRAMP",
                "CMMC",
                "SOX Compliance",
                "Data Classification Standards",
            ],
        ),
        Domain::new(
            "Integration Security",
            &[
                "API Security",
                "Secure Integration Patterns",
                "OAuth-secured APIs",
                "Webhooks Security",
                "Cross-Domain Integration Risks",
                "Integration Authentication",
                "System-to-System Encryption",
            ],
        ),
    ];

    let frameworks = vec![
        FrameworkFilter::new(
            "NIST 800-53",
            &[
                "Authentication & Authorization",
                "Data Protection & Privacy",
                "Risk Management & Governance",
                "Security Operations & Monitoring",
                "Compliance Frameworks",
                "Integration Security",
            ],
        ),
        FrameworkFilter::new(
            "HIPAA",
            &[
                "Data Protection & Privacy",
                "Risk Management & Governance",
                "Compliance Frameworks",
            ],
        ),
        FrameworkFilter::new(
            "ISO 27001",
            &[
                "Authentication & Authorization",
                "Data Protection & Privacy",
                "Risk Management & Governance",
                "Security Operations & Monitoring",
                "Compliance Frameworks",
            ],
        ),
        FrameworkFilter::new(
            "SOC 2",
            &[
                "Authentication & Authorization",
                "Risk Management & Governance",
                "Security Operations & Monitoring",
                "Compliance Frameworks",
            ],
        ),
        FrameworkFilter::new(
            "GDPR",
            &["Data Protection & Privacy", "Compliance Frameworks"],
        ),
        FrameworkFilter::new(
            "PCI-DSS",
            &[
                "Authentication & Authorization",
                "Data Protection & Privacy",
                "Integration Security",
                "Compliance Frameworks",
            ],
        ),
    ];

    Taxonomy::new(CYBER_SECURITY, domains, frameworks)
        .expect("built-in cyber security taxonomy is valid")
}

/// Web development taxonomy (no framework filters)
pub fn web_development() -> Taxonomy {
    let domains = vec![
        Domain::new(
            "Frontend Frameworks",
            &[
                "React",
                "Vue.js",
                "Angular",
                "Svelte",
                "Next.js",
                "TypeScript",
                "Responsive Design",
                "Web Components",
                "State Management",
            ],
        ),
        Domain::new(
            "Backend & APIs",
            &[
                "Node.js",
                "REST API",
                "GraphQL",
                "Express",
                "Django",
                "Microservices",
                "WebSockets",
                "API Versioning",
                "Rate Limiting",
            ],
        ),
        Domain::new(
            "Databases & Storage",
            &[
                "PostgreSQL",
                "MySQL",
                "MongoDB",
                "Redis",
                "Database Indexing",
                "Query Optimization",
                "Data Modeling",
                "Connection Pooling",
            ],
        ),
        Domain::new(
            "DevOps & Deployment",
            &[
                "Docker",
                "Kubernetes",
                "CI/CD",
                "GitHub Actions",
                "Terraform",
                "Load Balancing",
                "Blue-Green Deployment",
                "Infrastructure as Code",
            ],
        ),
        Domain::new(
            "Web Performance",
            &[
                "Lazy Loading",
                "Code Splitting",
                "Caching Strategies",
                "CDN",
                "Core Web Vitals",
                "Bundle Optimization",
                "Image Optimization",
            ],
        ),
        Domain::new(
            "Testing & Quality",
            &[
                "Unit Testing",
                "Integration Testing",
                "End-to-End Testing",
                "Jest",
                "Cypress",
                "Test-Driven Development",
                "Code Review",
                "Accessibility Testing",
            ],
        ),
    ];

    Taxonomy::new(WEB_DEVELOPMENT, domains, vec![])
        .expect("built-in web development taxonomy is valid")
}

/// Finance taxonomy (no framework filters)
pub fn finance() -> Taxonomy {
    let domains = vec![
        Domain::new(
            "Financial Analysis",
            &[
                "Financial Modeling",
                "Variance Analysis",
                "Forecasting",
                "Budgeting",
                "Scenario Analysis",
                "Ratio Analysis",
                "Valuation",
            ],
        ),
        Domain::new(
            "Accounting & Reporting",
            &[
                "GAAP",
                "IFRS",
                "General Ledger",
                "Month-End Close",
                "Financial Statements",
                "Account Reconciliation",
                "Revenue Recognition",
            ],
        ),
        Domain::new(
            "Risk & Compliance",
            &[
                "SOX Compliance",
                "Internal Controls",
                "Audit Support",
                "Regulatory Reporting",
                "Anti-Money Laundering",
                "Know Your Customer",
                "Basel III",
            ],
        ),
        Domain::new(
            "Treasury & Capital",
            &[
                "Cash Flow Management",
                "Liquidity Planning",
                "Capital Allocation",
                "Hedging",
                "Foreign Exchange",
                "Debt Management",
            ],
        ),
        Domain::new(
            "Financial Systems",
            &[
                "ERP Systems",
                "SAP",
                "Oracle Financials",
                "Power BI",
                "SQL",
                "Excel Macros",
                "Data Visualization",
            ],
        ),
        Domain::new(
            "Strategy & Operations",
            &[
                "Cost Optimization",
                "Due Diligence",
                "KPI Reporting",
                "Process Improvement",
                "Stakeholder Management",
                "Business Partnering",
            ],
        ),
    ];

    Taxonomy::new(FINANCE, domains, vec![]).expect("built-in finance taxonomy is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_taxonomies_validate() {
        let taxonomies = all();
        assert_eq!(taxonomies.len(), 3);
        for taxonomy in &taxonomies {
            assert!(!taxonomy.domains.is_empty());
        }
    }

    #[test]
    fn security_field_has_six_domains_and_six_frameworks() {
        let security = cyber_security();
        assert_eq!(security.domains.len(), 6);
        assert_eq!(security.frameworks.len(), 6);
    }

    #[test]
    fn hipaa_covers_exactly_three_domains() {
        let security = cyber_security();
        let hipaa = security.framework("HIPAA").unwrap();
        assert_eq!(
            hipaa.domains,
            vec![
                "Data Protection & Privacy",
                "Risk Management & Governance",
                "Compliance Frameworks",
            ]
        );
    }

    #[test]
    fn only_the_security_field_defines_frameworks() {
        assert!(web_development().frameworks.is_empty());
        assert!(finance().frameworks.is_empty());
    }

    #[test]
    fn field_lookup_accepts_slugs_and_display_names() {
        assert!(by_field("Cyber Security").is_some());
        assert!(by_field("cyber-security").is_some());
        assert!(by_field("WEB DEVELOPMENT").is_some());
        assert!(by_field("finance").is_some());
        assert!(by_field("astrology").is_none());
    }

    #[test]
    fn keywords_may_repeat_across_domains() {
        // "GDPR" appears standalone in Compliance Frameworks and as part of
        // "GDPR Compliance" in Data Protection & Privacy; both are kept.
        let security = cyber_security();
        let compliance = security
            .domains
            .iter()
            .find(|d| d.name == "Compliance Frameworks")
            .unwrap();
        assert!(compliance.keywords.iter().any(|k| k == "GDPR"));
    }
}
