//! Question strategy port - abstraction over attribute-selection policies
//!
//! Both decision policies plug into a [`crate::session::Session`] through
//! this trait:
//! - Entropy-driven belief tracking ([`crate::beliefs::BeliefEngine`])
//! - Reward-driven scheduling ([`crate::strategy::RewardStrategy`])

use std::collections::BTreeSet;

use crate::{answer::Answer, identifiers::AttributeId, verdict::Verdict};

/// Unified interface for the question-selection policies.
///
/// # Turn Sequence
///
/// 1. `verdict()` - stop if it is terminal
/// 2. `next_attribute()` - pick and mark the next attribute; `None` when exhausted
/// 3. `record_answer(...)` - fold the player's answer into the strategy state
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use akinator::{Answer, BeliefEngine, Catalog, ports::QuestionStrategy};
///
/// fn play_all_yes(strategy: &mut dyn QuestionStrategy) {
///     while !strategy.verdict().is_terminal() {
///         match strategy.next_attribute() {
///             Some(attribute) => strategy.record_answer(&attribute, Answer::Yes),
///             None => break,
///         }
///     }
/// }
///
/// let mut engine = BeliefEngine::new(Arc::new(Catalog::food()));
/// play_all_yes(&mut engine);
/// assert!(engine.verdict().is_terminal());
/// ```
pub trait QuestionStrategy: Send {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Choose the next attribute and mark it asked.
    ///
    /// An attribute is never offered twice. Returns `None` once every
    /// attribute has been asked.
    fn next_attribute(&mut self) -> Option<AttributeId>;

    /// Fold an answer about `attribute` into the strategy state.
    fn record_answer(&mut self, attribute: &AttributeId, answer: Answer);

    /// Current verdict.
    fn verdict(&self) -> Verdict;

    /// Attributes asked so far this session.
    fn asked(&self) -> &BTreeSet<AttributeId>;

    /// Enable downcasting to concrete types.
    ///
    /// Lets callers inspect strategy internals (the belief distribution, the
    /// utility table) when needed.
    fn as_any(&self) -> &dyn std::any::Any;
}
