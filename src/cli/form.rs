//! Terminal Form
//!
//! Gathers the five profile fields. Values passed as flags are used as-is;
//! anything missing is asked for on the terminal.

use console::{Term, style};
use std::io::{BufRead, IsTerminal};

use crate::types::{CareerProfile, Result};

/// Field prompts, in form order
pub const FIELD_PROMPTS: [&str; 5] = [
    "Engineering Education (e.g., Computer Science, Mechanical)",
    "Skills (e.g., Python, CAD, project management)",
    "Internships/Experience (e.g., 3 months at XYZ Corp, software dev)",
    "Interests (e.g., AI, robotics, sustainable energy)",
    "Career Goals (e.g., become a data scientist, start a tech company)",
];

/// Field values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub education: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub interests: Option<String>,
    pub goals: Option<String>,
}

impl FormInput {
    pub fn is_complete(&self) -> bool {
        self.education.is_some()
            && self.skills.is_some()
            && self.experience.is_some()
            && self.interests.is_some()
            && self.goals.is_some()
    }
}

/// Fill missing fields from the terminal or from piped stdin.
///
/// Prompts go to stderr so stdout stays clean for the plan.
pub fn collect_profile(input: FormInput) -> Result<CareerProfile> {
    let term = Term::stderr();
    if !input.is_complete() {
        let intro = style("Enter your details to get a personalized career plan.").bold();
        term.write_line(&intro.to_string())?;
    }

    let interactive = std::io::stdin().is_terminal() && term.is_term();
    collect_profile_with(input, |label| {
        term.write_str(&format!("{}: ", style(label).cyan()))?;
        if interactive {
            term.read_line()
        } else {
            read_answer(&mut std::io::stdin().lock())
        }
    })
}

/// Read one answer line; running out of input is an error
fn read_answer<R: BufRead>(reader: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input ended before all fields were entered",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Fill missing fields with `ask`, called once per missing field
pub fn collect_profile_with<F>(input: FormInput, mut ask: F) -> Result<CareerProfile>
where
    F: FnMut(&str) -> std::io::Result<String>,
{
    let mut field = |value: Option<String>, label: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Ok(ask(label)?),
        }
    };

    Ok(CareerProfile {
        education: field(input.education, FIELD_PROMPTS[0])?,
        skills: field(input.skills, FIELD_PROMPTS[1])?,
        experience: field(input.experience, FIELD_PROMPTS[2])?,
        interests: field(input.interests, FIELD_PROMPTS[3])?,
        goals: field(input.goals, FIELD_PROMPTS[4])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_used_without_prompting() {
        let input = FormInput {
            education: Some("CS".to_string()),
            skills: Some("Rust".to_string()),
            experience: Some("intern".to_string()),
            interests: Some("AI".to_string()),
            goals: Some(String::new()),
        };
        assert!(input.is_complete());

        let profile = collect_profile_with(input, |label| panic!("asked for {}", label)).unwrap();
        assert_eq!(profile.skills, "Rust");
        assert_eq!(profile.goals, "");
    }

    #[test]
    fn test_missing_fields_are_prompted_in_order() {
        let input = FormInput {
            skills: Some("CAD".to_string()),
            ..Default::default()
        };
        let mut asked = Vec::new();
        let profile = collect_profile_with(input, |label| {
            asked.push(label.to_string());
            Ok(format!("answer {}", asked.len()))
        })
        .unwrap();

        assert_eq!(asked.len(), 4);
        assert!(asked[0].starts_with("Engineering Education"));
        assert!(asked[3].starts_with("Career Goals"));
        assert_eq!(profile.education, "answer 1");
        assert_eq!(profile.skills, "CAD");
        assert_eq!(profile.goals, "answer 4");
    }

    #[test]
    fn test_read_failure_propagates() {
        let result = collect_profile_with(FormInput::default(), |_| {
            Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed"))
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_piped_answers_fill_every_field() {
        let mut stdin = std::io::Cursor::new("Computer Science\nRust\r\nintern\nAI\nML engineer\n");
        let profile =
            collect_profile_with(FormInput::default(), |_| read_answer(&mut stdin)).unwrap();

        assert_eq!(
            profile,
            CareerProfile::new("Computer Science", "Rust", "intern", "AI", "ML engineer")
        );
    }

    #[test]
    fn test_piped_input_ending_early_is_error() {
        let mut stdin = std::io::Cursor::new("Computer Science\nRust\n");
        let result = collect_profile_with(FormInput::default(), |_| read_answer(&mut stdin));
        assert!(matches!(result, Err(crate::types::CareerError::Io(_))));
    }

    #[test]
    fn test_blank_piped_line_is_kept_empty() {
        let mut stdin = std::io::Cursor::new("\n");
        assert_eq!(read_answer(&mut stdin).unwrap(), "");
    }
}
