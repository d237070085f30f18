//! Player answers to attribute questions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Imprecise answer to a yes/no attribute question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
    Maybe,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::Maybe];

    /// Literal token recorded in answer records and used as the utility-table action.
    pub fn token(self) -> &'static str {
        match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Maybe => "maybe",
        }
    }

    /// Scalar reward fed to the utility table: yes → 1, no → 0, maybe → 0.5.
    pub fn reward(self) -> f64 {
        match self {
            Answer::Yes => 1.0,
            Answer::No => 0.0,
            Answer::Maybe => 0.5,
        }
    }

    /// Whether an item holding `value` for the asked attribute is consistent
    /// with this answer. `None` for [`Answer::Maybe`], which carries no
    /// evidence either way.
    pub fn matches(self, value: bool) -> Option<bool> {
        match self {
            Answer::Yes => Some(value),
            Answer::No => Some(!value),
            Answer::Maybe => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Answer {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            "maybe" | "m" | "?" => Ok(Answer::Maybe),
            _ => Err(crate::Error::ParseAnswer {
                input: s.to_string(),
                expected: "yes/y, no/n, maybe/m".to_string(),
            }),
        }
    }
}
