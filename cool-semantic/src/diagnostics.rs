use cool_core::Line;
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn error(&mut self, line: Line, message: impl Into<String>) {
        self.errors.push(format!("Error (Line {line}): {}", message.into()));
    }

    pub fn warn(&mut self, line: Line, message: impl Into<String>) {
        self.warnings.push(format!("Warning (Line {line}): {}", message.into()));
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
