//! Utility table for the reward-driven question scheduler

use std::collections::HashMap;

use crate::{
    Error, Result,
    answer::Answer,
    identifiers::AttributeId,
};

/// Utility table mapping (attribute, action) pairs to value estimates
///
/// Actions are answer tokens. The table starts with a zero row for every known
/// attribute over the yes/no/maybe columns and grows on first use of an
/// unseen attribute or action.
#[derive(Debug, Clone)]
pub struct UtilityTable {
    /// Estimates: (attribute, action) -> utility
    values: HashMap<(AttributeId, String), f64>,
    /// Known attributes, in insertion order
    attributes: Vec<AttributeId>,
    /// Known action columns, in insertion order
    actions: Vec<String>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl UtilityTable {
    /// Create a zero-initialised table over `attributes` × {yes, no, maybe}.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `learning_rate` ∈ (0, 1] and
    /// `discount_factor` ∈ [0, 1].
    pub fn new(attributes: &[AttributeId], learning_rate: f64, discount_factor: f64) -> Result<Self> {
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "learning rate",
                value: learning_rate,
                expected: "(0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&discount_factor) {
            return Err(Error::InvalidParameter {
                name: "discount factor",
                value: discount_factor,
                expected: "[0, 1]",
            });
        }

        let mut table = Self {
            values: HashMap::new(),
            attributes: Vec::new(),
            actions: Answer::ALL.iter().map(|a| a.token().to_string()).collect(),
            learning_rate,
            discount_factor,
        };
        for attribute in attributes {
            table.ensure_attribute(attribute);
        }
        Ok(table)
    }

    /// Add a zero row for `attribute` if it is not tracked yet.
    pub fn ensure_attribute(&mut self, attribute: &AttributeId) {
        if self.attributes.contains(attribute) {
            return;
        }
        self.attributes.push(attribute.clone());
        for action in &self.actions {
            self.values
                .insert((attribute.clone(), action.clone()), 0.0);
        }
    }

    /// Add a zero column for `action` if it is not tracked yet.
    pub fn ensure_action(&mut self, action: &str) {
        if self.actions.iter().any(|known| known == action) {
            return;
        }
        self.actions.push(action.to_string());
        for attribute in &self.attributes {
            self.values
                .insert((attribute.clone(), action.to_string()), 0.0);
        }
    }

    /// Get the estimate for an (attribute, action) pair; unseen pairs read as 0.
    pub fn get(&self, attribute: &AttributeId, action: &str) -> f64 {
        self.values
            .get(&(attribute.clone(), action.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set the estimate for an (attribute, action) pair, growing the table as needed.
    pub fn set(&mut self, attribute: &AttributeId, action: &str, value: f64) {
        self.ensure_attribute(attribute);
        self.ensure_action(action);
        self.values
            .insert((attribute.clone(), action.to_string()), value);
    }

    /// Maximum estimate over all action columns for `attribute`.
    pub fn max_estimate(&self, attribute: &AttributeId) -> f64 {
        self.actions
            .iter()
            .map(|action| self.get(attribute, action))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Sum of estimates over all action columns for `attribute`.
    pub fn attribute_total(&self, attribute: &AttributeId) -> f64 {
        self.actions
            .iter()
            .map(|action| self.get(attribute, action))
            .sum()
    }

    /// One-step bootstrapped update, returning the new estimate.
    ///
    /// U(a,x) ← U(a,x) + α[r + γ max_x' U(a',x') - U(a,x)], with the bootstrap
    /// term dropped when there is no next attribute.
    pub fn update(
        &mut self,
        attribute: &AttributeId,
        action: &str,
        reward: f64,
        next_attribute: Option<&AttributeId>,
    ) -> f64 {
        self.ensure_attribute(attribute);
        self.ensure_action(action);

        let current = self.get(attribute, action);
        let max_next = next_attribute.map_or(0.0, |next| self.max_estimate(next));
        let td_target = reward + self.discount_factor * max_next;
        let td_error = td_target - current;
        let updated = current + self.learning_rate * td_error;
        self.set(attribute, action, updated);
        updated
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Get total number of estimates stored
    pub fn size(&self) -> usize {
        self.values.len()
    }
}
