//! Entropy-driven belief engine over catalog items.
//!
//! Keeps a probability mass per item (aligned with catalog order), asks the
//! attribute whose yes/no split is expected to remove the most entropy, and
//! updates multiplicatively on each answer. The engine never fails at run
//! time: an answer pattern that eliminates every item resets the distribution
//! to uniform.

use std::{collections::BTreeSet, sync::Arc};

use tracing::{debug, warn};

use crate::{
    Result,
    answer::Answer,
    catalog::Catalog,
    identifiers::{AttributeId, ItemId},
    utils::{first_argmax_with_tolerance, normalize_weights, shannon_entropy_bits, uniform},
    verdict::Verdict,
};

/// Mass at or above which the leading item becomes the guess.
pub const CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Mass an item must exceed to make the uncertain shortlist.
pub const SHORTLIST_THRESHOLD: f64 = 0.1;

/// Factor applied to every item on a "maybe" answer.
///
/// Renormalization cancels it, so "maybe" leaves the ranking untouched. A
/// graded partial-match factor would make the answer informative.
pub const MAYBE_FACTOR: f64 = 0.5;

/// Gains closer than this are ties and go to the earlier attribute.
const GAIN_TIE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone)]
pub struct BeliefEngine {
    catalog: Arc<Catalog>,
    attributes: Vec<AttributeId>,
    mass: Vec<f64>,
    asked: BTreeSet<AttributeId>,
    uniform_resets: usize,
}

impl BeliefEngine {
    /// Engine over the catalog's own attribute list.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let attributes = catalog.attributes().to_vec();
        let mass = uniform(catalog.len());
        Self {
            catalog,
            attributes,
            mass,
            asked: BTreeSet::new(),
            uniform_resets: 0,
        }
    }

    /// Engine asking only `attributes`, in the given order.
    pub fn with_attributes(catalog: Arc<Catalog>, attributes: Vec<AttributeId>) -> Result<Self> {
        catalog.check_attributes(&attributes)?;
        let mut engine = Self::new(catalog);
        engine.attributes = attributes;
        Ok(engine)
    }

    /// Start over: uniform beliefs and nothing asked.
    pub fn reset(&mut self) {
        self.mass = uniform(self.catalog.len());
        self.asked.clear();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn asked(&self) -> &BTreeSet<AttributeId> {
        &self.asked
    }

    /// Attributes not yet asked, in attribute-list order.
    pub fn remaining_attributes(&self) -> impl Iterator<Item = &AttributeId> {
        self.attributes
            .iter()
            .filter(|attribute| !self.asked.contains(*attribute))
    }

    /// Current belief mass of `item`, `None` for names outside the catalog.
    pub fn probability(&self, item: &str) -> Option<f64> {
        self.catalog
            .items()
            .iter()
            .position(|entry| entry.name.as_str() == item)
            .map(|idx| self.mass[idx])
    }

    /// (item, mass) pairs in catalog order.
    pub fn distribution(&self) -> Vec<(&ItemId, f64)> {
        self.catalog
            .items()
            .iter()
            .map(|item| &item.name)
            .zip(self.mass.iter().copied())
            .collect()
    }

    /// Entropy of the current distribution in bits.
    pub fn entropy(&self) -> f64 {
        shannon_entropy_bits(self.mass.iter().copied())
    }

    /// How many times contradictory evidence forced a reset to uniform.
    pub fn uniform_resets(&self) -> usize {
        self.uniform_resets
    }

    /// (value of `attribute`, mass) per item. Items without the attribute read as false.
    fn split<'a>(&'a self, attribute: &'a str) -> impl Iterator<Item = (bool, f64)> + 'a {
        self.catalog
            .items()
            .iter()
            .map(move |item| item.value(attribute).unwrap_or(false))
            .zip(self.mass.iter().copied())
    }

    /// Expected entropy reduction (bits) from asking `attribute`.
    pub fn information_gain(&self, attribute: &str) -> f64 {
        let yes_mass: f64 = self
            .split(attribute)
            .filter(|(value, _)| *value)
            .map(|(_, mass)| mass)
            .sum();
        let no_mass = 1.0 - yes_mass;

        if yes_mass == 0.0 || no_mass == 0.0 {
            return 0.0;
        }

        let yes_entropy = shannon_entropy_bits(
            self.split(attribute)
                .filter(|(value, _)| *value)
                .map(|(_, mass)| mass / yes_mass),
        );
        let no_entropy = shannon_entropy_bits(
            self.split(attribute)
                .filter(|(value, _)| !*value)
                .map(|(_, mass)| mass / no_mass),
        );

        self.entropy() - (yes_mass * yes_entropy + no_mass * no_entropy)
    }

    /// Choose the unasked attribute with the highest information gain and mark
    /// it asked. Returns `None` once every attribute has been asked.
    pub fn pick_attribute(&mut self) -> Option<AttributeId> {
        let candidates: Vec<&AttributeId> = self.remaining_attributes().collect();
        let gains: Vec<f64> = candidates
            .iter()
            .map(|attribute| self.information_gain(attribute.as_str()))
            .collect();
        let best = first_argmax_with_tolerance(gains.iter().copied(), GAIN_TIE_TOLERANCE)?;
        let chosen = candidates[best].clone();

        debug!(
            attribute = %chosen,
            gain = gains[best],
            remaining = candidates.len() - 1,
            "picked attribute"
        );
        self.asked.insert(chosen.clone());
        Some(chosen)
    }

    /// Apply an answer about `attribute` to the distribution.
    pub fn record_answer(&mut self, answer: Answer, attribute: &AttributeId) {
        self.asked.insert(attribute.clone());

        for (mass, item) in self.mass.iter_mut().zip(self.catalog.items()) {
            let value = item.value(attribute.as_str()).unwrap_or(false);
            *mass *= match answer.matches(value) {
                Some(true) => 1.0,
                Some(false) => 0.0,
                None => MAYBE_FACTOR,
            };
        }

        match normalize_weights(self.mass.iter().copied()) {
            Some(normalized) => self.mass = normalized,
            None => {
                warn!(
                    attribute = %attribute,
                    %answer,
                    "answer eliminated every item; resetting beliefs to uniform"
                );
                self.mass = uniform(self.catalog.len());
                self.uniform_resets += 1;
            }
        }

        debug!(
            attribute = %attribute,
            %answer,
            entropy = self.entropy(),
            "recorded answer"
        );
    }

    fn leader(&self) -> usize {
        first_argmax_with_tolerance(self.mass.iter().copied(), 0.0).unwrap_or(0)
    }

    /// The item with the highest mass (earliest in catalog order on ties).
    pub fn most_likely(&self) -> (&ItemId, f64) {
        let idx = self.leader();
        (&self.catalog.items()[idx].name, self.mass[idx])
    }

    /// Confident guess, uncertain shortlist once questions run out, or in progress.
    pub fn verdict(&self) -> Verdict {
        let (leader, leader_mass) = self.most_likely();
        if leader_mass >= CONFIDENCE_THRESHOLD {
            return Verdict::Decided(leader.clone());
        }
        if self.remaining_attributes().next().is_some() {
            return Verdict::InProgress;
        }

        let shortlist: Vec<usize> = (0..self.mass.len())
            .filter(|&idx| self.mass[idx] > SHORTLIST_THRESHOLD)
            .collect();
        let shortlist = if shortlist.is_empty() {
            vec![self.leader()]
        } else {
            shortlist
        };
        let most_likely = first_argmax_with_tolerance(shortlist.iter().map(|&idx| self.mass[idx]), 0.0)
            .map(|pos| shortlist[pos])
            .unwrap_or_else(|| self.leader());

        let items = self.catalog.items();
        Verdict::Uncertain {
            candidates: shortlist.iter().map(|&idx| items[idx].name.clone()).collect(),
            most_likely: items[most_likely].name.clone(),
        }
    }
}
