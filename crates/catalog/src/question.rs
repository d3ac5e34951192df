use serde::{Deserialize, Serialize};

/// One stage of the guided narrowing flow, bound to one record column.
///
/// The question sequence is defined once at load time and immutable after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// The `PatternRecord` field this question filters on
    pub column: String,

    /// Display text shown to the user
    pub prompt: String,
}

impl Question {
    pub fn new(column: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            prompt: prompt.into(),
        }
    }

    /// The reference three-step flow: environment, platform, requirement.
    #[must_use]
    pub fn default_flow() -> Vec<Self> {
        vec![
            Self::new("Environment", "Select your environment:"),
            Self::new("Platform", "Select your platform:"),
            Self::new("Requirement", "Select your requirement:"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flow_filters_in_order() {
        let flow = Question::default_flow();
        let columns: Vec<&str> = flow.iter().map(|q| q.column.as_str()).collect();
        assert_eq!(columns, vec!["Environment", "Platform", "Requirement"]);
    }
}
