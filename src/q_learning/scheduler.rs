//! Reward-driven question scheduler
//!
//! Picks the unasked attribute with the highest summed utility (ε-greedy,
//! random tie-break), learns from each answer through the utility table and
//! names a final guess by attribute-match scoring over the recorded answers.

use std::collections::{BTreeMap, BTreeSet};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    Result,
    catalog::Catalog,
    identifiers::{AttributeId, ItemId},
    q_learning::utility_table::UtilityTable,
};

pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_DISCOUNT: f64 = 0.9;
pub const DEFAULT_EXPLORATION_RATE: f64 = 0.1;

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

#[derive(Debug, Clone)]
pub struct RewardScheduler {
    table: UtilityTable,
    attributes: Vec<AttributeId>,
    /// Literal answer token per asked attribute
    answers: BTreeMap<AttributeId, String>,
    rng: StdRng,
}

impl RewardScheduler {
    /// Create a scheduler over `attributes` with an injected random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use akinator::{Catalog, RewardScheduler};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let catalog = Catalog::food();
    /// let scheduler = RewardScheduler::new(
    ///     catalog.attributes().to_vec(),
    ///     0.1,
    ///     0.9,
    ///     StdRng::seed_from_u64(7),
    /// )?;
    /// assert_eq!(scheduler.table().size(), 18);
    /// # Ok::<(), akinator::Error>(())
    /// ```
    pub fn new(
        attributes: Vec<AttributeId>,
        learning_rate: f64,
        discount_factor: f64,
        rng: StdRng,
    ) -> Result<Self> {
        let table = UtilityTable::new(&attributes, learning_rate, discount_factor)?;
        Ok(Self {
            table,
            attributes,
            answers: BTreeMap::new(),
            rng,
        })
    }

    /// Scheduler with default learning parameters, seeded when `seed` is given.
    pub fn with_seed(attributes: Vec<AttributeId>, seed: Option<u64>) -> Result<Self> {
        Self::new(
            attributes,
            DEFAULT_LEARNING_RATE,
            DEFAULT_DISCOUNT,
            build_rng(seed),
        )
    }

    pub fn table(&self) -> &UtilityTable {
        &self.table
    }

    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn answers(&self) -> &BTreeMap<AttributeId, String> {
        &self.answers
    }

    /// ε-greedy choice among attributes not in `asked`.
    ///
    /// Explores uniformly with probability `exploration_rate`; otherwise takes
    /// the highest summed utility, breaking ties uniformly at random.
    pub fn choose_attribute(
        &mut self,
        asked: &BTreeSet<AttributeId>,
        exploration_rate: f64,
    ) -> Option<AttributeId> {
        let remaining: Vec<&AttributeId> = self
            .attributes
            .iter()
            .filter(|attribute| !asked.contains(*attribute))
            .collect();
        if remaining.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < exploration_rate {
            let chosen = remaining.choose(&mut self.rng).map(|a| (*a).clone());
            debug!(attribute = ?chosen, "explored random attribute");
            return chosen;
        }

        let totals: Vec<f64> = remaining
            .iter()
            .map(|attribute| self.table.attribute_total(attribute))
            .collect();
        let best = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let optimal: Vec<&AttributeId> = remaining
            .iter()
            .zip(&totals)
            .filter(|(_, total)| **total == best)
            .map(|(attribute, _)| *attribute)
            .collect();

        let chosen = optimal.choose(&mut self.rng).map(|a| (*a).clone());
        debug!(
            attribute = ?chosen,
            utility = best,
            ties = optimal.len(),
            "chose highest-utility attribute"
        );
        chosen
    }

    /// Uniformly random attribute not in `asked`.
    pub fn random_attribute(&mut self, asked: &BTreeSet<AttributeId>) -> Option<AttributeId> {
        let remaining: Vec<&AttributeId> = self
            .attributes
            .iter()
            .filter(|attribute| !asked.contains(*attribute))
            .collect();
        remaining.choose(&mut self.rng).map(|a| (*a).clone())
    }

    /// Apply a one-step bootstrapped update for `action` on `attribute`.
    pub fn update_utility(
        &mut self,
        attribute: &AttributeId,
        action: &str,
        reward: f64,
        next_attribute: Option<&AttributeId>,
    ) -> f64 {
        let updated = self.table.update(attribute, action, reward, next_attribute);
        debug!(
            attribute = %attribute,
            action,
            reward,
            next = ?next_attribute,
            utility = updated,
            "updated utility"
        );
        updated
    }

    /// Remember the literal answer token given for `attribute`.
    pub fn record_answer(&mut self, attribute: &AttributeId, token: &str) {
        self.answers.insert(attribute.clone(), token.to_string());
    }

    /// Attribute-match guess over the recorded answers.
    ///
    /// Answers become a 0/1 vector (only a literal "yes" counts as 1); each
    /// item scores the dot product with its own attribute values. The first
    /// item in catalog order wins ties.
    pub fn final_guess(&self, catalog: &Catalog) -> Option<ItemId> {
        let answered_yes: Vec<bool> = self
            .attributes
            .iter()
            .map(|attribute| {
                self.answers
                    .get(attribute)
                    .is_some_and(|token| token == "yes")
            })
            .collect();

        let mut best: Option<(&ItemId, usize)> = None;
        for item in catalog.items() {
            let score = self
                .attributes
                .iter()
                .zip(&answered_yes)
                .filter(|(attribute, yes)| **yes && item.value(attribute.as_str()).unwrap_or(false))
                .count();
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((&item.name, score));
            }
        }
        best.map(|(item, _)| item.clone())
    }
}
