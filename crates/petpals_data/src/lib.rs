//! # PetPals Data
//!
//! Plain data types shared by the engine and its front-ends: pets, their
//! immutable traits, and the derived mood.

pub mod data;

pub use data::pet::{Pet, PetColor, PetId, STAT_MAX, STAT_MIN, STARTING_STAT};
pub use data::traits::{InteractionKind, Mood, ParseTraitError, Personality, Species};
