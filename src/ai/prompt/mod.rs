//! Prompt Builder System
//!
//! Section-based prompt construction for LLM interactions. Sections are
//! rendered in insertion order as plain text; values are inserted verbatim.

/// Prompt section types
#[derive(Debug, Clone)]
pub enum PromptSection {
    /// Opening line: "As a {role}, {task}:"
    Role { role: String, task: String },
    /// Labeled bullet list, order preserved
    Context(Vec<(String, String)>),
    /// Header followed by a numbered list
    Objectives { header: String, items: Vec<String> },
    /// Raw text line
    Text(String),
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the role line
    pub fn role(mut self, role: &str, task: &str) -> Self {
        self.sections.push(PromptSection::Role {
            role: role.to_string(),
            task: task.to_string(),
        });
        self
    }

    /// Add a context item, extending the last context section if present
    pub fn context_item(mut self, label: &str, value: &str) -> Self {
        let item = (label.to_string(), value.to_string());
        match self.sections.last_mut() {
            Some(PromptSection::Context(items)) => items.push(item),
            _ => self.sections.push(PromptSection::Context(vec![item])),
        }
        self
    }

    /// Add a numbered list under a header
    pub fn objectives(mut self, header: &str, items: &[&str]) -> Self {
        self.sections.push(PromptSection::Objectives {
            header: header.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Add a text line
    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text(content.to_string()));
        self
    }

    /// Build the final prompt string
    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Role { role, task } => {
                    prompt.push_str(&format!("As {} {}, {}:\n", article(&role), role, task));
                }
                PromptSection::Context(items) => {
                    for (label, value) in items {
                        prompt.push_str(&format!("- {}: {}\n", label, value));
                    }
                    prompt.push('\n');
                }
                PromptSection::Objectives { header, items } => {
                    prompt.push_str(&format!("{}:\n", header));
                    for (i, item) in items.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, item));
                    }
                }
                PromptSection::Text(content) => {
                    prompt.push_str(&content);
                    prompt.push('\n');
                }
            }
        }

        prompt.trim_end_matches('\n').to_string()
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
