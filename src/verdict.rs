//! Engine output classification.

use serde::{Deserialize, Serialize};

use crate::identifiers::ItemId;

/// What the engine currently believes the secret item is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Verdict {
    /// A single confident guess.
    Decided(ItemId),
    /// Questions ran out before any item crossed the confidence bar.
    Uncertain {
        candidates: Vec<ItemId>,
        most_likely: ItemId,
    },
    /// More questions are needed.
    InProgress,
}

impl Verdict {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// The single item the engine would name if forced to answer now.
    pub fn best_guess(&self) -> Option<&ItemId> {
        match self {
            Verdict::Decided(item) => Some(item),
            Verdict::Uncertain { most_likely, .. } => Some(most_likely),
            Verdict::InProgress => None,
        }
    }
}
