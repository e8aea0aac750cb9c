//! Category scoring for Schooner dice rolls.
//!
//! All functions are pure: a roll is tallied fresh on every call and nothing
//! is cached, so every entry point is safe to call from any thread.

pub mod scoring;

pub use schooner_core::{Category, ParseCategoryError, RollTally, ScoringConfig};
pub use scoring::{ScoreCard, Scorer, score, score_card, score_named, top_categories};
