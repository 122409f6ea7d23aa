//! # PetPals Core
//!
//! The interaction engine behind PetPals: virtual pets with fixed
//! personalities that react to being played with, fed, petted, sung to or
//! given gifts.
//!
//! This crate contains:
//! - Pet generation from species-keyed name pools and color palettes
//! - The personality response table and interaction resolver
//! - The selection state machine and bounded interaction history
//! - A [`Session`] facade tying them together over an injectable RNG
//! - Configuration, errors and structured logging
//!
//! ## Example
//!
//! ```
//! use petpals_core::{EngineConfig, InteractionKind, PetId, Session};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut session = Session::with_rng(EngineConfig::default(), rng).unwrap();
//!
//! session.select_pet(PetId(1)).unwrap();
//! session.select_target(PetId(2)).unwrap();
//! let outcome = session.interact(InteractionKind::Feed).unwrap();
//!
//! assert_eq!(outcome.source.energy(), 45);
//! assert_eq!(session.history().latest(), Some(outcome.entry.as_str()));
//! ```

/// Engine configuration loaded from `petpals.toml`
pub mod config;
/// Error types and result alias
pub mod error;
/// Random pet creation
pub mod generator;
/// Bounded newest-first interaction log
pub mod history;
/// Response table, reaction tiers and the interaction resolver
pub mod interaction;
/// Session counters and logging setup
pub mod metrics;
/// Source/target selection state machine
pub mod selection;
/// Session facade driving generation, selection and interaction
pub mod session;

pub use config::{EngineConfig, RuleConfig, SessionConfig};
pub use error::{EngineError, Result};
pub use history::InteractionHistory;
pub use interaction::{resolve, response_magnitude, InteractionOutcome, Reaction};
pub use metrics::{init_logging, SessionStats};
pub use petpals_data::{InteractionKind, Mood, Personality, Pet, PetColor, PetId, Species};
pub use selection::Selection;
pub use session::Session;

/// Mood for the given stats. See [`Mood::derive`].
#[must_use]
pub fn derive_mood(energy: u8, affection: u8) -> Mood {
    Mood::derive(energy, affection)
}
