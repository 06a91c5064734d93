//! Career Prompt
//!
//! Maps a `CareerProfile` to the instruction string sent to a provider.
//! Field values are embedded verbatim: nothing is escaped, so text that
//! looks like instructions reaches the model unchanged.

use crate::ai::PromptBuilder;
use crate::types::CareerProfile;

/// The five sections every plan is asked to contain
pub const PLAN_SECTIONS: [&str; 5] = [
    "Short-term steps (1-2 years)",
    "Long-term steps (3-5 years)",
    "Job roles to target",
    "Skills to learn",
    "Resources (courses, books, etc.)",
];

/// Build the career-plan prompt for one submission
pub fn build_career_prompt(profile: &CareerProfile) -> String {
    PromptBuilder::new()
        .role(
            "career advisor",
            "provide a detailed career plan for a student with",
        )
        .context_item("Engineering Education", &profile.education)
        .context_item("Skills", &profile.skills)
        .context_item("Internships/Experience", &profile.experience)
        .context_item("Interests", &profile.interests)
        .context_item("Career Goals", &profile.goals)
        .objectives("Include", &PLAN_SECTIONS)
        .text("Keep it concise, actionable, and tailored.")
        .build()
}
