//! Strategy selection and the reward-driven session policy.
//!
//! [`StrategyKind`] picks the policy at session start. The entropy-driven
//! policy is the [`BeliefEngine`] itself; the reward-driven policy wraps a
//! [`RewardScheduler`] with the difficulty rules of the guessing game.

use std::{any::Any, collections::BTreeSet, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    answer::Answer,
    app::SessionConfig,
    beliefs::BeliefEngine,
    catalog::Catalog,
    identifiers::AttributeId,
    ports::QuestionStrategy,
    q_learning::{RewardScheduler, scheduler::build_rng},
    verdict::Verdict,
};

/// Which decision policy drives a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Information-gain question choice over a belief distribution
    #[default]
    Entropy,
    /// Utility-table question choice with attribute-match guessing
    Reward,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrategyKind::Entropy => "entropy",
            StrategyKind::Reward => "reward",
        };
        f.write_str(label)
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entropy" | "belief" | "information-gain" => Ok(StrategyKind::Entropy),
            "reward" | "q-learning" | "rl" => Ok(StrategyKind::Reward),
            _ => Err(Error::ParseStrategy {
                input: s.to_string(),
                expected: "entropy, reward".to_string(),
            }),
        }
    }
}

/// Difficulty of the reward-driven game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random next attribute
    #[default]
    Easy,
    /// Highest-utility next attribute with ε-greedy exploration
    Hard,
}

impl Difficulty {
    /// Parse a free-form difficulty answer, treating anything unrecognised as Easy.
    pub fn parse_or_default(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
                expected: "easy, hard".to_string(),
            }),
        }
    }
}

impl QuestionStrategy for BeliefEngine {
    fn name(&self) -> &str {
        "entropy"
    }

    fn next_attribute(&mut self) -> Option<AttributeId> {
        self.pick_attribute()
    }

    fn record_answer(&mut self, attribute: &AttributeId, answer: Answer) {
        BeliefEngine::record_answer(self, answer, attribute);
    }

    fn verdict(&self) -> Verdict {
        BeliefEngine::verdict(self)
    }

    fn asked(&self) -> &BTreeSet<AttributeId> {
        BeliefEngine::asked(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reward-driven policy: the first attribute of the list opens the game,
/// then Easy picks at random and Hard asks the scheduler.
///
/// Each answer updates the utility table as soon as it is recorded, with no
/// successor term.
#[derive(Debug, Clone)]
pub struct RewardStrategy {
    catalog: Arc<Catalog>,
    scheduler: RewardScheduler,
    difficulty: Difficulty,
    exploration_rate: f64,
    asked: BTreeSet<AttributeId>,
}

impl RewardStrategy {
    pub fn new(
        catalog: Arc<Catalog>,
        scheduler: RewardScheduler,
        difficulty: Difficulty,
        exploration_rate: f64,
    ) -> Result<Self> {
        check_exploration_rate(exploration_rate)?;
        catalog.check_attributes(scheduler.attributes())?;
        Ok(Self {
            catalog,
            scheduler,
            difficulty,
            exploration_rate,
            asked: BTreeSet::new(),
        })
    }

    pub fn scheduler(&self) -> &RewardScheduler {
        &self.scheduler
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn exhausted(&self) -> bool {
        self.scheduler
            .attributes()
            .iter()
            .all(|attribute| self.asked.contains(attribute))
    }
}

impl QuestionStrategy for RewardStrategy {
    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "reward-easy",
            Difficulty::Hard => "reward-hard",
        }
    }

    fn next_attribute(&mut self) -> Option<AttributeId> {
        let next = if self.asked.is_empty() {
            self.scheduler.attributes().first().cloned()
        } else {
            match self.difficulty {
                Difficulty::Easy => self.scheduler.random_attribute(&self.asked),
                Difficulty::Hard => self
                    .scheduler
                    .choose_attribute(&self.asked, self.exploration_rate),
            }
        };

        if let Some(attribute) = &next {
            debug!(attribute = %attribute, difficulty = %self.difficulty, "scheduled attribute");
            self.asked.insert(attribute.clone());
        }
        next
    }

    fn record_answer(&mut self, attribute: &AttributeId, answer: Answer) {
        self.scheduler
            .update_utility(attribute, answer.token(), answer.reward(), None);
        self.scheduler.record_answer(attribute, answer.token());
        self.asked.insert(attribute.clone());
    }

    fn verdict(&self) -> Verdict {
        if !self.exhausted() {
            return Verdict::InProgress;
        }
        self.scheduler
            .final_guess(&self.catalog)
            .map_or(Verdict::InProgress, Verdict::Decided)
    }

    fn asked(&self) -> &BTreeSet<AttributeId> {
        &self.asked
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn check_exploration_rate(rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "exploration rate",
            value: rate,
            expected: "[0, 1]",
        })
    }
}

/// Build the policy selected by `config` over `catalog`.
pub fn build_strategy(
    catalog: Arc<Catalog>,
    config: &SessionConfig,
) -> Result<Box<dyn QuestionStrategy>> {
    let attributes = config
        .attributes
        .clone()
        .unwrap_or_else(|| catalog.attributes().to_vec());
    catalog.check_attributes(&attributes)?;

    match config.strategy {
        StrategyKind::Entropy => Ok(Box::new(BeliefEngine::with_attributes(
            catalog, attributes,
        )?)),
        StrategyKind::Reward => {
            let scheduler = RewardScheduler::new(
                attributes,
                config.learning_rate,
                config.discount_factor,
                build_rng(config.seed),
            )?;
            Ok(Box::new(RewardStrategy::new(
                catalog,
                scheduler,
                config.difficulty,
                config.exploration_rate,
            )?))
        }
    }
}
