//! Configuration types for session creation.

use crate::{
    identifiers::AttributeId,
    q_learning::{DEFAULT_DISCOUNT, DEFAULT_EXPLORATION_RATE, DEFAULT_LEARNING_RATE},
    questions::Language,
    strategy::{Difficulty, StrategyKind},
};

/// Configuration for starting a guessing session.
///
/// This type provides a type-safe, builder-style API for configuring sessions
/// before creation through the [`crate::app::App`] container.
///
/// # Examples
///
/// ```
/// use akinator::app::SessionConfig;
/// use akinator::{Difficulty, StrategyKind};
///
/// let config = SessionConfig::new(StrategyKind::Reward)
///     .with_difficulty(Difficulty::Hard)
///     .with_exploration_rate(0.2)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Decision policy
    pub strategy: StrategyKind,
    /// Difficulty of the reward-driven policy (ignored by the entropy policy)
    pub difficulty: Difficulty,
    /// Language of question prompts
    pub language: Language,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Probability of a random next attribute in Hard mode
    pub exploration_rate: f64,
    /// Utility-table learning rate α, in (0, 1]
    pub learning_rate: f64,
    /// Utility-table discount γ, in [0, 1]
    pub discount_factor: f64,
    /// Ordered attribute list; `None` uses the catalog's own order
    pub attributes: Option<Vec<AttributeId>>,
}

impl SessionConfig {
    /// Create a new session configuration for the given strategy.
    ///
    /// Uses default values for other parameters:
    /// - Difficulty: `Easy`
    /// - Language: `English`
    /// - Exploration rate 0.1, learning rate 0.1, discount 0.9
    /// - Seed: None (non-deterministic)
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            difficulty: Difficulty::default(),
            language: Language::default(),
            seed: None,
            exploration_rate: DEFAULT_EXPLORATION_RATE,
            learning_rate: DEFAULT_LEARNING_RATE,
            discount_factor: DEFAULT_DISCOUNT,
            attributes: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_discount_factor(mut self, discount: f64) -> Self {
        self.discount_factor = discount;
        self
    }

    /// Restrict and order the attributes the session may ask about.
    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AttributeId>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}
