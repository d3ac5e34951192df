use serde::{Deserialize, Serialize};

/// One catalog entry describing a tool/platform/requirement combination.
///
/// Records come from an external tabular source whose column headers are
/// capitalized, hence the `PascalCase` rename. Absent columns deserialize as
/// empty strings and are valid non-matches, never a load error. Records are
/// created once at load time and immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PatternRecord {
    /// Tool name, also the search-index key source
    pub tool: String,

    /// Target environment (e.g. "prod", "nonprod")
    pub environment: String,

    /// Hosting platform (e.g. "cloud", "onprem")
    pub platform: String,

    /// The requirement this pattern addresses (e.g. "monitoring")
    pub requirement: String,

    /// Deployment model shown on the result card
    pub deployment: String,

    /// Multi-line guidance text; may embed `label|url` and `·` bullet lines
    pub description: String,

    /// Multi-line reference links, one `label|url` entry per line
    pub link: String,
}

impl PatternRecord {
    /// Resolve a question column name to the field it filters on.
    ///
    /// Column names are matched case-insensitively; unknown columns resolve
    /// to the empty string, which matches nothing concrete.
    #[must_use]
    pub fn field(&self, column: &str) -> &str {
        match column.to_ascii_lowercase().as_str() {
            "tool" => &self.tool,
            "environment" => &self.environment,
            "platform" => &self.platform,
            "requirement" => &self.requirement,
            "deployment" => &self.deployment,
            _ => "",
        }
    }

    /// Case-insensitive equality between a filter column and a chosen value.
    #[must_use]
    pub fn matches(&self, column: &str, value: &str) -> bool {
        let field = self.field(column);
        !field.is_empty() && field.eq_ignore_ascii_case(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(tool: &str, environment: &str, platform: &str, requirement: &str) -> PatternRecord {
        PatternRecord {
            tool: tool.to_string(),
            environment: environment.to_string(),
            platform: platform.to_string(),
            requirement: requirement.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn deserializes_capitalized_source_keys() {
        let raw = r#"{
            "Tool": "Dynatrace",
            "Environment": "prod",
            "Platform": "cloud",
            "Requirement": "monitoring",
            "Deployment": "SaaS",
            "Description": "line one",
            "Link": "Docs|https://example.com"
        }"#;
        let parsed: PatternRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.tool, "Dynatrace");
        assert_eq!(parsed.deployment, "SaaS");
        assert_eq!(parsed.link, "Docs|https://example.com");
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let parsed: PatternRecord = serde_json::from_str(r#"{"Tool": "SCOM"}"#).unwrap();
        assert_eq!(parsed.tool, "SCOM");
        assert_eq!(parsed.environment, "");
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let rec = record("Azure", "prod", "cloud", "HA");
        assert_eq!(rec.field("Environment"), "prod");
        assert_eq!(rec.field("environment"), "prod");
        assert_eq!(rec.field("REQUIREMENT"), "HA");
        assert_eq!(rec.field("nonsense"), "");
    }

    #[test]
    fn matches_compares_values_case_insensitively() {
        let rec = record("Azure", "Prod", "cloud", "HA");
        assert!(rec.matches("Environment", "prod"));
        assert!(rec.matches("environment", "PROD"));
        assert!(!rec.matches("Environment", "nonprod"));
    }

    #[test]
    fn empty_field_never_matches() {
        let rec = record("Azure", "", "cloud", "HA");
        assert!(!rec.matches("Environment", "prod"));
        assert!(!rec.matches("Environment", ""));
        assert!(!rec.matches("nonsense", ""));
    }
}
