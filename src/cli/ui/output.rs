use console::{Term, style};
use std::io::Write;

use crate::types::CareerPlan;

pub struct Output {
    term: Term,
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    /// Show a transient status line; `clear_pending` removes it
    pub fn pending(&self, message: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {}", style("…").cyan(), style(message).dim()));
    }

    pub fn clear_pending(&self) {
        if self.term.is_term() {
            let _ = self.term.clear_last_lines(1);
        }
    }

    /// Print the result text to stdout, the same place for every outcome
    pub fn plan(&self, plan: &CareerPlan) -> std::io::Result<()> {
        write_plan(&mut std::io::stdout().lock(), plan)
    }
}

/// Write a plan's text unchanged, followed by a newline
pub fn write_plan<W: Write>(out: &mut W, plan: &CareerPlan) -> std::io::Result<()> {
    writeln!(out, "{}", plan.text())?;
    out.flush()
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(plan: &CareerPlan) -> String {
        let mut buf = Vec::new();
        write_plan(&mut buf, plan).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_every_outcome_is_written_unchanged() {
        let generated = CareerPlan::Generated("## Short-term goals\n- learn Rust".to_string());
        assert_eq!(rendered(&generated), "## Short-term goals\n- learn Rust\n");

        let failed = CareerPlan::Failed("Error: openai request failed: timeout".to_string());
        assert!(rendered(&failed).starts_with("Error: "));

        let incomplete = CareerPlan::Incomplete("Warning: please fill in all fields".to_string());
        assert_eq!(rendered(&incomplete), "Warning: please fill in all fields\n");
    }
}
