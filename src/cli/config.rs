//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::{App, SessionConfig},
    q_learning::DEFAULT_EXPLORATION_RATE,
    questions::Language,
    strategy::{Difficulty, StrategyKind},
};

/// Session options shared by `play` and `simulate`
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Question-selection strategy (entropy, reward)
    #[arg(long, short = 's', default_value = "entropy")]
    pub strategy: StrategyKind,

    /// Difficulty of the reward strategy (easy, hard)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Language of the questions
    #[arg(long, default_value = "english")]
    pub language: Language,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability of a random question in hard mode
    #[arg(long, default_value_t = DEFAULT_EXPLORATION_RATE)]
    pub exploration_rate: f64,

    /// JSON catalog to play over instead of the built-in food catalog
    #[arg(long, short = 'c')]
    pub catalog: Option<PathBuf>,
}

impl SessionArgs {
    /// Build the app over the requested catalog.
    pub fn load_app(&self) -> Result<App> {
        match &self.catalog {
            Some(path) => App::from_catalog_path(path)
                .with_context(|| format!("loading catalog from {}", path.display())),
            None => Ok(App::new()),
        }
    }

    /// Session configuration for these options at the given difficulty.
    pub fn session_config(&self, difficulty: Difficulty) -> SessionConfig {
        let config = SessionConfig::new(self.strategy)
            .with_difficulty(difficulty)
            .with_language(self.language)
            .with_exploration_rate(self.exploration_rate);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

impl Default for SessionArgs {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            difficulty: None,
            language: Language::default(),
            seed: None,
            exploration_rate: DEFAULT_EXPLORATION_RATE,
            catalog: None,
        }
    }
}
