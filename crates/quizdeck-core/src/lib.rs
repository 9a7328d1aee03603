//! quizdeck-core — data model, validation, and scoring for quizdeck.
//!
//! This crate defines the entity types the store persists, the shape
//! validation and sanitization applied to untrusted persisted JSON, and the
//! quiz-domain logic built on top: taking sessions, authoring drafts, the
//! built-in catalog, progress statistics, and leaderboard ranking.

pub mod builder;
pub mod catalog;
pub mod leaderboard;
pub mod model;
pub mod session;
pub mod statistics;
pub mod validate;
