use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u32);

impl Line {
    pub fn new(line: u32) -> Self {
        Self(line)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Line {
    fn from(line: u32) -> Self {
        Self(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_displays_bare_number() {
        assert_eq!(Line::new(42).to_string(), "42");
        assert_eq!(format!("Error (Line {}): boom", Line::from(7)), "Error (Line 7): boom");
    }
}
