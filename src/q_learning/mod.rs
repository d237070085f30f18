//! Reward-driven attribute selection via temporal difference learning
//!
//! An alternative to the entropy-driven [`crate::beliefs::BeliefEngine`] for
//! deciding which attribute to ask next. Instead of a belief distribution it
//! keeps a utility estimate per (attribute, answer) pair.
//!
//! ## Update rule
//!
//! | Term | Meaning |
//! |------|---------|
//! | `r` | Reward from the answer: yes → 1, no → 0, maybe → 0.5 |
//! | `α` | Learning rate, (0, 1] |
//! | `γ` | Discount, [0, 1] |
//! | `max U(a', ·)` | Best estimate for the next attribute asked (0 at the end) |
//!
//! `U(a, x) ← U(a, x) + α [r + γ max U(a', ·) − U(a, x)]`
//!
//! ## Usage Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use akinator::{Catalog, q_learning::RewardScheduler};
//!
//! let catalog = Catalog::food();
//! let mut scheduler = RewardScheduler::with_seed(catalog.attributes().to_vec(), Some(42))?;
//!
//! let asked = BTreeSet::new();
//! let attribute = scheduler.choose_attribute(&asked, 0.1).expect("attributes remain");
//! scheduler.record_answer(&attribute, "yes");
//! scheduler.update_utility(&attribute, "yes", 1.0, None);
//! assert!(scheduler.final_guess(&catalog).is_some());
//! # Ok::<(), akinator::Error>(())
//! ```

pub mod scheduler;
pub mod utility_table;

// Public re-exports
pub use scheduler::{
    DEFAULT_DISCOUNT, DEFAULT_EXPLORATION_RATE, DEFAULT_LEARNING_RATE, RewardScheduler,
};
pub use utility_table::UtilityTable;
