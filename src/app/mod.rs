//! Application layer with dependency injection container.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │   App (owns Arc<Catalog>, seed)      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ starts                     │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Session (turn loop, transcript)     │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ drives                     │
//! │                 ▼                            │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Port: QuestionStrategy              │   │
//! │  │  - BeliefEngine (entropy)            │   │
//! │  │  - RewardStrategy (utility table)    │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use akinator::app::{App, SessionConfig};
//! use akinator::{Answer, Step, StrategyKind};
//!
//! let app = App::new();
//! let mut session = app.start_session(SessionConfig::new(StrategyKind::Entropy))?;
//! if let Step::Ask(question) = session.next_question() {
//!     assert_eq!(question.prompt, "Is it vegetarian?");
//!     session.submit_answer(Answer::Yes);
//! }
//! # Ok::<(), akinator::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::SessionConfig;
pub use container::{App, AppBuilder};
