//! Career Profile and Plan
//!
//! Input and output of a single submission. Both are ephemeral and live
//! for one request only.

use serde::{Deserialize, Serialize};

/// The five free-text fields a user fills in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfile {
    /// Engineering education (e.g. Computer Science, Mechanical)
    pub education: String,
    /// Skills (e.g. Python, CAD, project management)
    pub skills: String,
    /// Internships or work experience
    pub experience: String,
    /// Interests (e.g. AI, robotics, sustainable energy)
    pub interests: String,
    /// Career goals; may be left empty
    pub goals: String,
}

impl CareerProfile {
    pub fn new(
        education: impl Into<String>,
        skills: impl Into<String>,
        experience: impl Into<String>,
        interests: impl Into<String>,
        goals: impl Into<String>,
    ) -> Self {
        Self {
            education: education.into(),
            skills: skills.into(),
            experience: experience.into(),
            interests: interests.into(),
            goals: goals.into(),
        }
    }

    /// Field labels paired with their values, in form order
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("education", self.education.as_str()),
            ("skills", self.skills.as_str()),
            ("experience", self.experience.as_str()),
            ("interests", self.interests.as_str()),
            ("goals", self.goals.as_str()),
        ]
    }

    /// Labels of fields that are empty or whitespace only
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label)
            .collect()
    }
}

/// Result of one submission, always rendered as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerPlan {
    /// Text produced by the backend, unchanged
    Generated(String),
    /// Provider failure rendered as an `Error:` message
    Failed(String),
    /// Input validation warning; the backend was not contacted
    Incomplete(String),
}

impl CareerPlan {
    /// Text to show in the output area
    pub fn text(&self) -> &str {
        match self {
            Self::Generated(text) | Self::Failed(text) | Self::Incomplete(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        let profile = CareerProfile::new("CS", "  ", "", "robotics", "startup");
        assert_eq!(profile.missing_fields(), vec!["skills", "experience"]);
    }

    #[test]
    fn test_complete_profile_has_no_missing_fields() {
        let profile = CareerProfile::new("CS", "Rust", "3 months", "AI", "ML engineer");
        assert!(profile.missing_fields().is_empty());
    }

    #[test]
    fn test_plan_text() {
        let plan = CareerPlan::Generated("## Plan".to_string());
        assert_eq!(plan.text(), "## Plan");
        assert!(plan.is_success());

        let failed = CareerPlan::Failed("Error: boom".to_string());
        assert!(!failed.is_success());
        assert_eq!(failed.text(), "Error: boom");
    }
}
