//! Static question text and verdict phrasing per language.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{identifiers::ItemId, verdict::Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => f.write_str("English"),
        }
    }
}

impl FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            _ => Err(crate::Error::ParseLanguage {
                input: s.to_string(),
                expected: "english".to_string(),
            }),
        }
    }
}

const ENGLISH_QUESTIONS: &[(&str, &str)] = &[
    ("Vegetarian", "Is it vegetarian?"),
    ("Spicy", "Is it spicy?"),
    ("Vegan", "Is it vegan?"),
    ("Solid", "Is it solid in form?"),
    ("MainDish", "Is it a main course dish?"),
    ("ServedHot", "Is it served hot?"),
];

fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => ENGLISH_QUESTIONS,
    }
}

/// Question prompt for `attribute`.
///
/// Attributes without an entry get a generated default, so this never fails.
///
/// ```
/// use akinator::{Language, question_for};
///
/// assert_eq!(question_for("Spicy", Language::English), "Is it spicy?");
/// assert_eq!(question_for("Crunchy", Language::English), "Does it have Crunchy?");
/// ```
pub fn question_for(attribute: &str, language: Language) -> String {
    table(language)
        .iter()
        .find(|(name, _)| *name == attribute)
        .map(|(_, prompt)| (*prompt).to_string())
        .unwrap_or_else(|| match language {
            Language::English => format!("Does it have {attribute}?"),
        })
}

/// Fixed UI strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrasebook {
    pub yes: &'static str,
    pub no: &'static str,
    pub maybe: &'static str,
    pub predict: &'static str,
    pub confident: &'static str,
    pub unsure: &'static str,
    pub most_likely: &'static str,
    pub thinking: &'static str,
}

impl Phrasebook {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self {
                yes: "Yes",
                no: "No",
                maybe: "Maybe",
                predict: "I think the food is",
                confident: "I guess your food is",
                unsure: "Not sure. Could be:",
                most_likely: "Most likely:",
                thinking: "Still thinking...",
            },
        }
    }

    /// Announcement for a confident belief-engine guess.
    pub fn announce_guess(&self, item: &ItemId) -> String {
        format!("{} {item}!", self.confident)
    }

    /// Final prediction line of the reward-driven game.
    pub fn announce_prediction(&self, item: &ItemId) -> String {
        format!("{} {item}.", self.predict)
    }

    /// Human-readable rendering of a verdict.
    pub fn describe(&self, verdict: &Verdict) -> String {
        match verdict {
            Verdict::Decided(item) => self.announce_guess(item),
            Verdict::Uncertain {
                candidates,
                most_likely,
            } => {
                let names: Vec<&str> = candidates.iter().map(ItemId::as_str).collect();
                format!(
                    "{} {}.\n{} {most_likely}",
                    self.unsure,
                    names.join(", "),
                    self.most_likely
                )
            }
            Verdict::InProgress => self.thinking.to_string(),
        }
    }
}
