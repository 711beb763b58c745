// Shared enums

use std::fmt;

/// Verdict for a sentence or a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// At least one vocabulary word was recognized.
    Accepted,
    /// No vocabulary word was recognized.
    Rejected,
}

impl Status {
    /// `Accepted` when `accepted` is true, `Rejected` otherwise.
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Status::Accepted
        } else {
            Status::Rejected
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Status::Accepted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_accepted() {
        assert_eq!(Status::from_accepted(true), Status::Accepted);
        assert_eq!(Status::from_accepted(false), Status::Rejected);
    }

    #[test]
    fn display() {
        assert_eq!(Status::Accepted.to_string(), "Accepted");
        assert_eq!(Status::Rejected.to_string(), "Rejected");
    }
}
