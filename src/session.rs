//! The question/answer loop shared by both strategies.
//!
//! A [`Session`] owns one strategy and walks the player through
//! `next_question` → `submit_answer` turns until the verdict is terminal.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    Result,
    answer::Answer,
    app::SessionConfig,
    catalog::Catalog,
    identifiers::AttributeId,
    ports::QuestionStrategy,
    questions::{Language, question_for},
    strategy::{StrategyKind, build_strategy},
    verdict::Verdict,
};

/// A question put to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub attribute: AttributeId,
    pub prompt: String,
}

/// Outcome of asking the session what happens next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Ask(Question),
    Finished(Verdict),
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub attribute: AttributeId,
    pub prompt: String,
    pub answer: Answer,
}

/// A single guessing game.
pub struct Session {
    catalog: Arc<Catalog>,
    kind: StrategyKind,
    strategy: Box<dyn QuestionStrategy>,
    language: Language,
    pending: Option<Question>,
    transcript: Vec<Exchange>,
    finished: bool,
}

impl Session {
    /// Build the configured strategy over `catalog` and open a fresh game.
    pub fn start(catalog: Arc<Catalog>, config: SessionConfig) -> Result<Self> {
        let strategy = build_strategy(Arc::clone(&catalog), &config)?;
        info!(
            strategy = strategy.name(),
            items = catalog.len(),
            seed = ?config.seed,
            "session started"
        );
        Ok(Self {
            catalog,
            kind: config.strategy,
            strategy,
            language: config.language,
            pending: None,
            transcript: Vec::new(),
            finished: false,
        })
    }

    /// The question awaiting an answer, or the final verdict.
    ///
    /// Calling this again before answering returns the same question.
    pub fn next_question(&mut self) -> Step {
        if let Some(question) = &self.pending {
            return Step::Ask(question.clone());
        }

        let verdict = self.strategy.verdict();
        if verdict.is_terminal() {
            return Step::Finished(self.finish(verdict));
        }

        match self.strategy.next_attribute() {
            Some(attribute) => {
                let question = Question {
                    prompt: question_for(attribute.as_str(), self.language),
                    attribute,
                };
                self.pending = Some(question.clone());
                Step::Ask(question)
            }
            // The entropy policy is terminal once exhausted, so this only
            // covers a strategy that runs dry while still undecided.
            None => Step::Finished(self.finish(verdict)),
        }
    }

    /// Answer the pending question. Ignored when nothing is pending.
    pub fn submit_answer(&mut self, answer: Answer) {
        let Some(question) = self.pending.take() else {
            warn!(%answer, "answer submitted with no pending question; ignoring");
            return;
        };
        self.strategy.record_answer(&question.attribute, answer);
        self.transcript.push(Exchange {
            attribute: question.attribute,
            prompt: question.prompt,
            answer,
        });
    }

    /// Current verdict; `InProgress` while a question awaits an answer.
    pub fn current_verdict(&self) -> Verdict {
        if self.pending.is_some() {
            return Verdict::InProgress;
        }
        self.strategy.verdict()
    }

    fn finish(&mut self, verdict: Verdict) -> Verdict {
        if !self.finished {
            self.finished = true;
            info!(
                strategy = self.strategy.name(),
                questions = self.transcript.len(),
                guess = ?verdict.best_guess().map(|item| item.as_str()),
                "session finished"
            );
        }
        verdict
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    pub fn questions_asked(&self) -> usize {
        self.transcript.len()
    }

    pub fn pending_question(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.kind
    }

    /// Borrow the strategy, e.g. to downcast through [`QuestionStrategy::as_any`].
    pub fn strategy(&self) -> &dyn QuestionStrategy {
        self.strategy.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beliefs::BeliefEngine;

    fn session(kind: StrategyKind) -> Session {
        Session::start(
            Arc::new(Catalog::food()),
            SessionConfig::new(kind).with_seed(7),
        )
        .unwrap()
    }

    #[test]
    fn repeats_pending_question_until_answered() {
        let mut session = session(StrategyKind::Entropy);
        let first = session.next_question();
        assert_eq!(session.next_question(), first);
        assert_eq!(session.current_verdict(), Verdict::InProgress);
    }

    #[test]
    fn ignores_answer_without_question() {
        let mut session = session(StrategyKind::Entropy);
        session.submit_answer(Answer::Yes);
        assert_eq!(session.questions_asked(), 0);
        let engine = session
            .strategy()
            .as_any()
            .downcast_ref::<BeliefEngine>()
            .unwrap();
        assert!(engine.asked().is_empty());
    }

    #[test]
    fn reward_session_asks_every_attribute() {
        let mut session = session(StrategyKind::Reward);
        let verdict = loop {
            match session.next_question() {
                Step::Ask(_) => session.submit_answer(Answer::No),
                Step::Finished(verdict) => break verdict,
            }
        };
        assert_eq!(session.questions_asked(), 6);
        assert!(matches!(verdict, Verdict::Decided(_)));
        assert!(session.is_finished());
    }
}
