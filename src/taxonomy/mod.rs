//! Keyword taxonomies: fields, domains, and compliance framework filters

pub mod builtin;

use crate::error::{Result, ResumeRadarError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named category of related skill keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Domain {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// A named subset of domains relevant to one compliance standard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkFilter {
    pub name: String,
    pub domains: Vec<String>,
}

impl FrameworkFilter {
    pub fn new(name: impl Into<String>, domains: &[&str]) -> Self {
        Self {
            name: name.into(),
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn covers(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }
}

/// One field's keyword taxonomy: an ordered list of domains plus optional
/// framework filters. Immutable after construction; built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub field: String,
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub frameworks: Vec<FrameworkFilter>,
}

impl Taxonomy {
    /// Build a validated taxonomy. Misconfiguration is rejected here so the
    /// scorer never has to guard against empty keyword lists or duplicate
    /// domain names at analysis time.
    pub fn new(
        field: impl Into<String>,
        domains: Vec<Domain>,
        frameworks: Vec<FrameworkFilter>,
    ) -> Result<Self> {
        let taxonomy = Self {
            field: field.into(),
            domains,
            frameworks,
        };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    fn validate(&self) -> Result<()> {
        if self.domains.is_empty() {
            return Err(ResumeRadarError::Taxonomy(format!(
                "Taxonomy '{}' declares no domains",
                self.field
            )));
        }

        let mut seen = HashSet::new();
        for domain in &self.domains {
            if !seen.insert(domain.name.as_str()) {
                return Err(ResumeRadarError::Taxonomy(format!(
                    "Duplicate domain name '{}' in taxonomy '{}'",
                    domain.name, self.field
                )));
            }
            if domain.keywords.is_empty() {
                return Err(ResumeRadarError::Taxonomy(format!(
                    "Domain '{}' in taxonomy '{}' has an empty keyword list",
                    domain.name, self.field
                )));
            }
        }

        for framework in &self.frameworks {
            if framework.domains.is_empty() {
                return Err(ResumeRadarError::Taxonomy(format!(
                    "Framework filter '{}' covers no domains",
                    framework.name
                )));
            }
            for name in &framework.domains {
                if !seen.contains(name.as_str()) {
                    return Err(ResumeRadarError::Taxonomy(format!(
                        "Framework filter '{}' references unknown domain '{}'",
                        framework.name, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Look up a framework filter by name
    pub fn framework(&self, name: &str) -> Option<&FrameworkFilter> {
        self.frameworks.iter().find(|f| f.name == name)
    }

    pub fn framework_names(&self) -> Vec<&str> {
        self.frameworks.iter().map(|f| f.name.as_str()).collect()
    }

    /// Total keyword count across all domains
    pub fn keyword_count(&self) -> usize {
        self.domains.iter().map(|d| d.keywords.len()).sum()
    }

    /// Load a custom taxonomy from a TOML file and validate it
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let taxonomy: Taxonomy = toml::from_str(&content).map_err(|e| {
            ResumeRadarError::Taxonomy(format!(
                "Failed to parse taxonomy file '{}': {}",
                path.display(),
                e
            ))
        })?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn two_domains() -> Vec<Domain> {
        vec![
            Domain::new("Auth", &["OAuth 2.0", "SAML"]),
            Domain::new("Privacy", &["GDPR", "Tokenization"]),
        ]
    }

    #[test]
    fn valid_taxonomy_constructs() {
        let taxonomy = Taxonomy::new("Test", two_domains(), vec![]).unwrap();
        assert_eq!(taxonomy.domains.len(), 2);
        assert_eq!(taxonomy.keyword_count(), 4);
    }

    #[test]
    fn empty_keyword_list_is_rejected() {
        let domains = vec![Domain::new("Auth", &[])];
        let result = Taxonomy::new("Test", domains, vec![]);
        assert!(matches!(result, Err(ResumeRadarError::Taxonomy(_))));
    }

    #[test]
    fn duplicate_domain_names_are_rejected() {
        let domains = vec![
            Domain::new("Auth", &["OAuth 2.0"]),
            Domain::new("Auth", &["SAML"]),
        ];
        let result = Taxonomy::new("Test", domains, vec![]);
        assert!(matches!(result, Err(ResumeRadarError::Taxonomy(_))));
    }

    #[test]
    fn taxonomy_without_domains_is_rejected() {
        let result = Taxonomy::new("Test", vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn framework_referencing_unknown_domain_is_rejected() {
        let frameworks = vec![FrameworkFilter::new("HIPAA", &["Nonexistent"])];
        let result = Taxonomy::new("Test", two_domains(), frameworks);
        assert!(result.is_err());
    }

    #[test]
    fn framework_lookup_is_exact() {
        let frameworks = vec![FrameworkFilter::new("GDPR", &["Privacy"])];
        let taxonomy = Taxonomy::new("Test", two_domains(), frameworks).unwrap();
        assert!(taxonomy.framework("GDPR").is_some());
        assert!(taxonomy.framework("gdpr").is_none());
        assert!(taxonomy.framework("SOC 2").is_none());
    }

    #[test]
    fn custom_taxonomy_loads_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
field = "Custom"

[[domains]]
name = "Tools"
keywords = ["Terraform", "Ansible"]
"#
        )
        .unwrap();

        let taxonomy = Taxonomy::from_toml_file(file.path()).unwrap();
        assert_eq!(taxonomy.field, "Custom");
        assert_eq!(taxonomy.domains[0].keywords.len(), 2);
        assert!(taxonomy.frameworks.is_empty());
    }

    #[test]
    fn invalid_custom_taxonomy_fails_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
field = "Custom"

[[domains]]
name = "Tools"
keywords = []
"#
        )
        .unwrap();

        assert!(Taxonomy::from_toml_file(file.path()).is_err());
    }
}
