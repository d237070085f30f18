//! Ports (trait boundaries) between the session loop and decision policies.
//!
//! The session drives any policy through these traits; the concrete
//! strategies live in [`crate::beliefs`] and [`crate::strategy`].

pub mod strategy;

pub use strategy::QuestionStrategy;
