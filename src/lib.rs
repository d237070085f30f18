//! Twenty-questions guesser over a catalog of items with boolean attributes
//!
//! This crate provides:
//! - A validated item catalog (built-in food catalog or JSON file)
//! - An entropy-driven belief engine that asks the most informative question
//! - A reward-driven utility table that schedules questions and learns as it plays
//! - Question text lookup and a turn-by-turn session API
//!
//! # Quick start
//!
//! ```
//! use akinator::{Answer, App, SessionConfig, Step, StrategyKind, Verdict};
//!
//! let app = App::new();
//! let mut session = app.start_session(SessionConfig::new(StrategyKind::Entropy))?;
//! let pizza = app.catalog().item("pizza").cloned().unwrap();
//!
//! let verdict = loop {
//!     match session.next_question() {
//!         Step::Ask(question) => {
//!             let value = pizza.value(question.attribute.as_str()).unwrap_or(false);
//!             session.submit_answer(if value { Answer::Yes } else { Answer::No });
//!         }
//!         Step::Finished(verdict) => break verdict,
//!     }
//! };
//! assert_eq!(verdict, Verdict::Decided("pizza".into()));
//! # Ok::<(), akinator::Error>(())
//! ```

pub mod answer;
pub mod app;
pub mod beliefs;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod q_learning;
pub mod questions;
pub mod session;
pub mod strategy;
pub mod utils;
pub mod verdict;

pub use answer::Answer;
pub use app::{App, SessionConfig};
pub use beliefs::BeliefEngine;
pub use catalog::{Catalog, Item};
pub use error::{Error, Result};
pub use identifiers::{AttributeId, ItemId};
pub use q_learning::{RewardScheduler, UtilityTable};
pub use questions::{Language, Phrasebook, question_for};
pub use session::{Exchange, Question, Session, Step};
pub use strategy::{Difficulty, RewardStrategy, StrategyKind};
pub use verdict::Verdict;
