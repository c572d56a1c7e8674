use crate::domain::models::AccessDecision;
use colored::{Color, Colorize};

/// Width the action column is padded to in decision lines.
const ACTION_COLUMN: usize = 70;

/// User-facing console output. Colors are applied only when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{}", self.paint(msg, Color::BrightBlue));
    }

    pub fn error(&self, msg: &str) {
        println!("{}", self.paint(msg, Color::BrightRed));
    }

    pub fn decision_tag(&self, decision: &AccessDecision) -> String {
        match decision {
            AccessDecision::Allowed => self.paint("🟢 allowed", Color::BrightGreen),
            AccessDecision::Conditional => self.paint("🟡 conditional", Color::BrightYellow),
            AccessDecision::NotAllowed => self.paint("🔴 notAllowed", Color::BrightRed),
            AccessDecision::Other(_) => {
                self.paint(&format!("❌ {}", decision.as_str()), Color::BrightRed)
            }
        }
    }

    pub fn decision_line(&self, action: &str, decision: &AccessDecision, scope: &str) -> String {
        format!(
            "{:width$} => {} {}",
            action,
            self.decision_tag(decision),
            scope,
            width = ACTION_COLUMN
        )
    }

    pub fn decision(&self, action: &str, decision: &AccessDecision, scope: &str) {
        println!("{}", self.decision_line(action, decision, scope));
    }
}
